use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Staged delays of the interaction model, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Simulated "thinking" latency before the assistant reply (default: 1500)
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
    /// Gap between the reply and the panel it triggers (default: 500)
    #[serde(default = "default_widget_trigger_delay_ms")]
    pub widget_trigger_delay_ms: u64,
    /// How long an achievement stays up before auto-dismiss (default: 5000)
    #[serde(default = "default_achievement_display_ms")]
    pub achievement_display_ms: u64,
    /// Exit transition before the achievement slot is cleared (default: 300)
    #[serde(default = "default_achievement_exit_ms")]
    pub achievement_exit_ms: u64,
}

const MAX_STAGE_DELAY_MS: u64 = 60_000;
const MAX_DISPLAY_MS: u64 = 600_000;

fn default_thinking_delay_ms() -> u64 {
    1_500
}

fn default_widget_trigger_delay_ms() -> u64 {
    500
}

fn default_achievement_display_ms() -> u64 {
    5_000
}

fn default_achievement_exit_ms() -> u64 {
    300
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            widget_trigger_delay_ms: default_widget_trigger_delay_ms(),
            achievement_display_ms: default_achievement_display_ms(),
            achievement_exit_ms: default_achievement_exit_ms(),
        }
    }
}

impl TimingConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    pub fn widget_trigger_delay(&self) -> Duration {
        Duration::from_millis(self.widget_trigger_delay_ms)
    }

    pub fn achievement_display(&self) -> Duration {
        Duration::from_millis(self.achievement_display_ms)
    }

    pub fn achievement_exit(&self) -> Duration {
        Duration::from_millis(self.achievement_exit_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let stages = [
            ("thinking_delay_ms", self.thinking_delay_ms),
            ("widget_trigger_delay_ms", self.widget_trigger_delay_ms),
            ("achievement_exit_ms", self.achievement_exit_ms),
        ];
        for (name, value) in stages {
            if value > MAX_STAGE_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "timing.{name} must be <= {MAX_STAGE_DELAY_MS}"
                )));
            }
        }
        if self.achievement_display_ms == 0 {
            return Err(ConfigError::Validation(
                "timing.achievement_display_ms must be >= 1".into(),
            ));
        }
        if self.achievement_display_ms > MAX_DISPLAY_MS {
            return Err(ConfigError::Validation(format!(
                "timing.achievement_display_ms must be <= {MAX_DISPLAY_MS}"
            )));
        }
        Ok(())
    }
}
