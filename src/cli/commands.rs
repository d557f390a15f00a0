//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load and validate configuration
//! 2. Seed collections (all-or-nothing)
//! 3. Start the tokio runtime and serve until Ctrl-C

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::rest_api::{Collections, SeedData};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Records inserted at startup
    #[serde(default)]
    pub seed: SeedData,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Configuration written by `init`: default listener plus three people
    pub fn starter() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed: SeedData {
                people: vec![
                    json!({"name": "Alice", "age": 30}),
                    json!({"name": "Bob", "age": 25}),
                    json!({"name": "Charlie", "age": 35}),
                ],
                ..Default::default()
            },
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::config_error)
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Check { config } => check(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write the starter configuration; never overwrites an existing file
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    let config = Config::starter();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    write_response(json!({ "config": config_path.display().to_string() }))
}

/// Load the configuration, seed fresh collections and report their sizes
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let collections = Collections::seeded(&config.seed)?;
    let counts = collections.counts()?;

    write_response(json!({
        "addr": config.http.socket_addr(),
        "records": counts,
    }))
}

/// Boot and serve until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let result = boot(config_path, port);
    if let Err(e) = &result {
        log_event_with_fields(
            Event::BootFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
    }
    result
}

fn boot(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }
    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", &path)]);

    let collections = Collections::seeded(&config.seed)?;
    let server = HttpServer::new(config.http, &collections);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_applies_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("restbox.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_port_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("restbox.json");
        fs::write(&path, r#"{"http": {"port": 0}}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "RESTBOX_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("restbox.json");

        init(&path).unwrap();
        let written = Config::load(&path).unwrap();
        assert_eq!(written, Config::starter());

        let err = init(&path).unwrap_err();
        assert_eq!(err.code_str(), "RESTBOX_CLI_ALREADY_INITIALIZED");
    }

    #[test]
    fn test_check_reports_bad_seed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("restbox.json");
        fs::write(
            &path,
            r#"{"seed": {"items": [{"name": "Lamp", "price": -1}]}}"#,
        )
        .unwrap();

        let err = check(&path).unwrap_err();
        assert_eq!(err.code_str(), "RESTBOX_CLI_CONFIG_ERROR");
    }
}
