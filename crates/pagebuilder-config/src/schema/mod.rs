//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Shared default helper.
pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub modules: ModulesConfig,
}

/// Application handle data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            public_url: default_public_url(),
        }
    }
}

fn default_app_name() -> String {
    "pagebuilder".to_string()
}

fn default_public_url() -> String {
    "http://localhost:3000".to_string()
}

/// Environment flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub dev: bool,

    #[serde(default)]
    pub feature_flags: BTreeSet<String>,
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_locale")]
    pub active: String,

    /// Merge the builder's bundled messages during bootstrap.
    #[serde(default = "default_true")]
    pub merge_builder_locales: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            active: default_locale(),
            merge_builder_locales: true,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rotated log files. `~` is expanded.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Log file prefix.
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Write the daily-rotated file log.
    #[serde(default = "default_true")]
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            file: default_log_file(),
            file_enabled: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "pagebuilder".to_string()
}

/// Registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reject registry writes once startup has finished.
    #[serde(default = "default_true")]
    pub freeze_after_startup: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            freeze_after_startup: true,
        }
    }
}

/// Modules installed at startup, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    #[serde(default = "default_modules")]
    pub enabled: Vec<String>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            enabled: default_modules(),
        }
    }
}

fn default_modules() -> Vec<String> {
    vec!["builder".to_string()]
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
