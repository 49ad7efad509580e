use super::Config;

fn env_millis(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.trim().parse().ok()
}

impl Config {
    /// Apply `GREENPATH_*` environment overrides. Unparseable values are
    /// ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(ms) = env_millis("GREENPATH_THINKING_DELAY_MS") {
            self.timing.thinking_delay_ms = ms;
        }

        if let Some(ms) = env_millis("GREENPATH_WIDGET_TRIGGER_DELAY_MS") {
            self.timing.widget_trigger_delay_ms = ms;
        }

        if let Some(ms) = env_millis("GREENPATH_ACHIEVEMENT_DISPLAY_MS") {
            self.timing.achievement_display_ms = ms;
        }

        if let Some(ms) = env_millis("GREENPATH_ACHIEVEMENT_EXIT_MS") {
            self.timing.achievement_exit_ms = ms;
        }

        if let Ok(backend) = std::env::var("GREENPATH_OBSERVABILITY")
            && !backend.is_empty()
        {
            self.observability.backend = backend;
        }

        if let Ok(json) = std::env::var("GREENPATH_JSON") {
            self.ui.json = matches!(json.trim(), "1" | "true" | "yes");
        }
    }
}
