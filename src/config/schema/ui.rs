use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Emit snapshots as JSON lines instead of styled text
    #[serde(default)]
    pub json: bool,
    /// Show HH:MM next to each transcript turn
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    /// Print the starter prompts when an interactive session opens
    #[serde(default = "default_true")]
    pub show_starters: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            json: false,
            show_timestamps: true,
            show_starters: true,
        }
    }
}
