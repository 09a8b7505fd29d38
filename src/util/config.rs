use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::debounce::SEARCH_DEBOUNCE;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "UnitCodex";
const APP_NAME: &str = "UnitCodex";

/// Overrides `dataset_path` when set.
pub const DATASET_ENV: &str = "UNIT_CODEX_DATASET";

/// User-tunable settings, read from `config.json` in the platform config dir.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// Quiet period before a search keystroke is committed.
    pub search_debounce_ms: u64,
    /// JSON file replacing the embedded dataset.
    pub dataset_path: Option<PathBuf>,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
            dataset_path: None,
        }
    }
}

impl CodexConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    fn with_env_override(mut self, dataset: Option<String>) -> Self {
        if let Some(path) = dataset.filter(|value| !value.trim().is_empty()) {
            self.dataset_path = Some(PathBuf::from(path));
        }
        self
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn parse_config(raw: &str) -> Result<CodexConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

fn read_config() -> Result<CodexConfig, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    let raw = fs::read_to_string(path)?;
    parse_config(&raw)
}

/// Reads the config file, falling back to defaults when it is absent or broken.
pub fn load_config() -> CodexConfig {
    let config = match read_config() {
        Ok(config) => {
            tracing::info!("loaded config from {:?}", config_file());
            config
        }
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no config file, using defaults");
            CodexConfig::default()
        }
        Err(err) => {
            tracing::warn!("failed to load config, using defaults: {err}");
            CodexConfig::default()
        }
    };
    config.with_env_override(std::env::var(DATASET_ENV).ok())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
