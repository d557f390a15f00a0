//! CLI module for restbox
//!
//! Provides command-line interface for:
//! - init: Write a starter configuration file
//! - check: Validate configuration and seed data
//! - serve: Boot the HTTP server

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, init, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
