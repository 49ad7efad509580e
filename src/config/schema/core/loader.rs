use super::Config;
use super::types::default_config_path;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.greenpath/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&default_config_path())
    }

    /// Load the config at `path`, writing defaults there if it does not exist.
    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)
                .map_err(ConfigError::Io)
                .context("Failed to create config directory")?;
        }

        if path.exists() {
            let contents = fs::read_to_string(path)
                .map_err(ConfigError::Io)
                .context("Failed to read config file")?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(e.to_string()))
                .context("Failed to parse config file")?;
            config.config_path = path.to_path_buf();
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path: path.to_path_buf(),
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            tracing::info!(path = %path.display(), "wrote default config");
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str)
            .map_err(ConfigError::Io)
            .context("Failed to write config file")?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
