//! CLI configuration: an optional TOML file with defaults for every key.
//!
//! The file is found at, in order of precedence:
//! 1. `--config <path>`
//! 2. `$ALGOKIT_CONFIG`
//! 3. `<config_dir>/algokit/config.toml`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ALGOKIT_CONFIG";

/// Project name, used for the config directory and in messages.
pub const PROJECT_NAME: &str = "algokit";

// ============================================================================
// Value enums
// ============================================================================

/// How command results are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Minimum spanning tree algorithm used by `graph mst`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Grow one tree from a start vertex; fails on disconnected graphs.
    #[default]
    Prim,
    /// Join the cheapest edges; gives a forest on disconnected graphs.
    Kruskal,
}

// ============================================================================
// Config sections
// ============================================================================

/// Top-level CLI configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset and `--verbose` is off.
    pub log_level: String,
    /// Output settings.
    pub output: OutputConfig,
    /// Graph command settings.
    pub graph: GraphConfig,
}

/// `[output]` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
}

/// `[graph]` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Default algorithm for `graph mst`.
    pub mst_algorithm: MstAlgorithm,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

impl CliConfig {
    /// The platform default config file, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config file path from an explicit path, the environment
    /// and the platform default, in that order.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Loads the resolved config file, or defaults when it does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Renders the config as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
