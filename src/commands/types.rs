use crate::widgets::FieldRef;

/// Slash commands accepted by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Explore,
    Prompts,
    /// Zero-based; the user types the one-based number shown by `/prompts`.
    Prompt { index: usize },
    Toggle { step: u8 },
    Set { field: FieldRef, value: String },
    Dismiss,
    Voice,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub text: String,
    pub quit: bool,
}

impl CommandResult {
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    pub fn silent() -> Self {
        Self::visible(String::new())
    }

    pub fn quit() -> Self {
        Self {
            text: String::new(),
            quit: true,
        }
    }
}
