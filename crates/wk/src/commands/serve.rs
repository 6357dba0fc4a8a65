//! `wk serve` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use wk_config::{CliSettings, Config};
use wk_server::{run_server, server_config_from_wk_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover wiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page data directory (overrides config).
    #[arg(short, long, env = "WK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and storage logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            data_dir: self.data_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        ensure_data_dir(&config.paths.data_dir)?;

        output.highlight(&format!(
            "Starting wiki on http://{}:{}",
            config.server.host, config.server.port
        ));
        match &config.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: none (using defaults)"),
        }
        output.info(&format!(
            "Data directory: {}",
            config.paths.data_dir.display()
        ));
        output.info(&format!(
            "Templates: {}",
            config.paths.templates_dir.display()
        ));
        output.info(&format!(
            "Static files: {}",
            config.paths.public_dir.display()
        ));
        if !config.paths.templates_dir.is_dir() {
            tracing::warn!(
                dir = %config.paths.templates_dir.display(),
                "Template directory does not exist; pages will fail to render"
            );
        }

        let server_config = server_config_from_wk_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        output.success("Server stopped");
        Ok(())
    }
}

/// Ensure the page data directory exists.
fn ensure_data_dir(data_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| CliError::Server(format!("Failed to create data directory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_data_dir_creates_nested_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join("wiki").join("data");

        ensure_data_dir(&data_dir).unwrap();
        ensure_data_dir(&data_dir).unwrap();

        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_ensure_data_dir_reports_file_in_the_way() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_data_dir(&blocker).unwrap_err();

        assert!(err.to_string().starts_with("Failed to create data directory"));
    }
}
