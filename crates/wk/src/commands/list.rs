//! `wk list` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use wk_config::{CliSettings, Config};
use wk_site::Site;
use wk_storage::FsPageStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover wiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page data directory (overrides config).
    #[arg(short, long, env = "WK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command, printing one title per line.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the store cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            data_dir: self.data_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output = Output::new();
        for title in stored_titles(&config)? {
            output.result(&title);
        }
        Ok(())
    }
}

/// Sorted titles in the configured data directory.
fn stored_titles(config: &Config) -> Result<Vec<String>, CliError> {
    let site = Site::new(Arc::new(FsPageStore::new(config.paths.data_dir.clone())));
    Ok(site.titles()?)
}
