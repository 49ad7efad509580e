use super::super::{ObservabilityConfig, TimingConfig, UiConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

pub(super) const CONFIG_DIR_NAME: &str = ".greenpath";
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";

pub(super) fn default_config_path() -> PathBuf {
    UserDirs::new().map_or_else(
        || PathBuf::from(CONFIG_DIR_NAME),
        |u| u.home_dir().join(CONFIG_DIR_NAME),
    )
    .join(CONFIG_FILE_NAME)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            timing: TimingConfig::default(),
            observability: ObservabilityConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        match self.observability.backend.as_str() {
            "none" | "noop" | "log" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "observability.backend '{other}' is not one of: none, log"
            ))),
        }
    }
}
