//! Page builder host.
//!
//! Bootstraps the namespaced type registry from configuration and exposes
//! read-only queries over it.

mod cli;
mod cmd_registry;
mod register;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagebuilder_config::{ConfigLoader, LoggingConfig};

use crate::cli::Cli;
use crate::cmd_registry::handle_command;
use crate::register::build_host;

/// Resolve the log directory: configured, else `~/.pagebuilder/logs`.
fn log_dir(config: &LoggingConfig) -> PathBuf {
    match &config.dir {
        Some(dir) => PathBuf::from(ConfigLoader::expand_path(&dir.to_string_lossy())),
        None => ConfigLoader::default_log_dir().unwrap_or_else(|| PathBuf::from("logs")),
    }
}

/// Initialize tracing with console and file output.
fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let file_layer = if config.file_enabled {
        let dir = log_dir(config);
        std::fs::create_dir_all(&dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&config.file)
            .filename_suffix("log")
            .max_log_files(30)
            .build(&dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the worker alive for the program duration.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Console output goes to stderr so command output stays parseable.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        config.locale.active = locale;
    }

    init_tracing(&config.logging)?;
    info!("Starting pagebuilder v{}", env!("CARGO_PKG_VERSION"));

    let host = build_host(&config)?;
    handle_command(&host, cli.command)
}
