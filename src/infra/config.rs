// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::RelayError;
use crate::infra::paths;
use crate::relay::chain::{Chain, DEFAULT_WRITERS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Writer languages after the base, in the order they run.
    pub chain: Vec<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            chain: DEFAULT_WRITERS
                .iter()
                .map(|kind| kind.name().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the base program is written to.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Colour the status messages embedded in the programs.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            color: true,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from the user config file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured chain, or `overrides` when given.
    pub fn chain(&self, overrides: Option<&[String]>) -> Result<Chain, RelayError> {
        let names = overrides.unwrap_or(self.relay.chain.as_slice());
        if names.is_empty() {
            return Err(RelayError::Config(
                "relay.chain must name at least one writer language".into(),
            ));
        }
        Chain::from_names(names)
    }
}
