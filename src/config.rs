// File: src/config.rs
//! Demo configuration.
//!
//! Looked up in this order:
//! 1. `DEMO_CONFIG_PATH` environment variable
//! 2. `./demo_config.toml`
//!
//! A missing file is not an error; every field has a default.

use crate::error::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "DEMO_CONFIG_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "demo_config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause between walkthrough steps, in milliseconds.
    pub step_delay_ms: u64,
    /// Where corpus edits are saved between sessions. `None` keeps them
    /// in memory only.
    pub corpus_snapshot: Option<PathBuf>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 700,
            corpus_snapshot: None,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads from the first location that exists, or returns defaults.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(env_path);
        return path.exists().then_some(path);
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}
