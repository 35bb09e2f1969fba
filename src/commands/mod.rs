//! CLI command implementations.
//!
//! Each submodule handles one command. Commands own the load-modify-save
//! cycle against the store; the estimation engine stays pure and is only
//! ever handed plain data.
//!
//! Available commands:
//! - **analyze**: run the engine on one module and append the result
//! - **dashboard**: portfolio summary plus the most recent analyses
//! - **list**: all recorded analyses, newest first
//! - **insights**: aggregate risk and cost statistics
//! - **clear**: delete the whole collection (the only destructive operation)
//! - **init**: write a default configuration file

pub mod analyze;
pub mod clear;
pub mod dashboard;
pub mod init;
pub mod insights;
pub mod list;

pub use analyze::AnalyzeOptions;

use std::path::PathBuf;

use crate::cli;
use crate::config::EstimapConfig;
use crate::io::output::OutputFormat;
use crate::storage::JsonFileStore;

/// Resolved runtime context shared by all commands.
pub struct Context {
    pub config: EstimapConfig,
    pub store: JsonFileStore,
}

impl Context {
    /// Build from global CLI flags; an explicit --store-dir wins over the
    /// configured directory.
    pub fn resolve(
        config_path: Option<&std::path::Path>,
        store_dir: Option<PathBuf>,
    ) -> crate::errors::Result<Self> {
        let config = crate::config::load(config_path)?;
        let directory = store_dir.unwrap_or_else(|| config.store.directory.clone());
        Ok(Self {
            config,
            store: JsonFileStore::new(directory),
        })
    }

    /// Per-command format flag, falling back to the configured default.
    pub fn format(&self, flag: Option<cli::OutputFormat>) -> OutputFormat {
        flag.map(OutputFormat::from)
            .unwrap_or_else(|| cli::OutputFormat::from(self.config.output.default_format).into())
    }
}
