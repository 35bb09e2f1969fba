//! Optional `.estimap.toml` configuration.
//!
//! Every key has a default, so running without a config file is the common
//! case. Model constants (band thresholds, cost-model exponents, the
//! per-person-month rate) are fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{EstimapError, Result};

pub const CONFIG_FILE: &str = ".estimap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimapConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the collection file.
    #[serde(default = "default_store_directory")]
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: default_store_directory(),
        }
    }
}

fn default_store_directory() -> PathBuf {
    PathBuf::from(".estimap")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: DefaultFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Latency-simulation hook in milliseconds, off by default. Purely
    /// cosmetic for demos; the engine itself never waits.
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

/// Load configuration. An explicitly named file must exist; the implicit
/// `.estimap.toml` in the working directory is optional.
pub fn load(path: Option<&Path>) -> Result<EstimapConfig> {
    match path {
        Some(explicit) => read_config(explicit),
        None => {
            let implicit = PathBuf::from(CONFIG_FILE);
            if implicit.exists() {
                read_config(&implicit)
            } else {
                Ok(EstimapConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<EstimapConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EstimapError::config_with_path(format!("cannot read config: {e}"), path)
    })?;
    toml::from_str(&content)
        .map_err(|e| EstimapError::config_with_path(format!("invalid config: {e}"), path))
}

pub fn default_config_toml() -> &'static str {
    r#"# estimap configuration

[store]
# Directory holding analyses.json
directory = ".estimap"

[output]
# terminal | json | markdown
default_format = "terminal"

[analysis]
# Artificial pause before reporting a result, in milliseconds. Off by
# default; only useful for interactive demos.
simulated_delay_ms = 0
"#
}
