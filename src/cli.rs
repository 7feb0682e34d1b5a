//! CLI definitions for the page builder host.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Page builder registry CLI.
#[derive(Parser)]
#[command(name = "pagebuilder")]
#[command(about = "Bootstrap the page builder registry and inspect its types")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.pagebuilder/config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the active locale
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List namespaces with their type counts
    Namespaces {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List the types of a namespace
    List {
        /// Namespace name, e.g. element or pageSidePanel
        namespace: String,

        /// Sort by display order instead of registration order
        #[arg(long)]
        ordered: bool,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the descriptor of one type
    Show {
        /// Namespace name
        namespace: String,

        /// Type key
        key: String,
    },

    /// Feed one realtime event through the host and print the store
    Dispatch {
        /// Event JSON, e.g. '{"type": "page_deleted", "page_id": 1}'
        event: String,
    },
}
