//! CLI argument definitions using clap
//!
//! Commands:
//! - restbox init --config <path>
//! - restbox check --config <path>
//! - restbox serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// restbox - an in-memory REST resource server
#[derive(Parser, Debug)]
#[command(name = "restbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./restbox.json")]
        config: PathBuf,
    },

    /// Validate a configuration file and its seed data
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./restbox.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./restbox.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
