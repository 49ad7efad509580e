use console::Style;
use std::fmt::Display;

/// Roles the terminal output paints. Renderers pick a role, never a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Achievements, completed steps, the active panel
    Success,
    Header,
    /// Timestamps, descriptions, the thinking indicator
    Dim,
    /// Rejected input and command errors
    Warn,
    /// Computed metrics
    Value,
    /// Assistant label, list numbers
    Accent,
    Label,
    User,
}

impl Tone {
    fn style(self) -> Style {
        let base = Style::new();
        match self {
            Self::Success => base.green().bold(),
            Self::Header => base.white().bold(),
            Self::Dim => base.dim(),
            Self::Warn => base.yellow(),
            Self::Value => base.green(),
            Self::Accent => base.cyan().bold(),
            Self::Label => base.cyan(),
            Self::User => base.magenta().bold(),
        }
    }
}

pub fn paint<D: Display>(tone: Tone, text: D) -> String {
    tone.style().apply_to(text).to_string()
}

pub fn success<D: Display>(text: D) -> String {
    paint(Tone::Success, text)
}

pub fn header<D: Display>(text: D) -> String {
    paint(Tone::Header, text)
}

pub fn dim<D: Display>(text: D) -> String {
    paint(Tone::Dim, text)
}

pub fn warn<D: Display>(text: D) -> String {
    paint(Tone::Warn, text)
}

pub fn value<D: Display>(text: D) -> String {
    paint(Tone::Value, text)
}

pub fn accent<D: Display>(text: D) -> String {
    paint(Tone::Accent, text)
}

pub fn label<D: Display>(text: D) -> String {
    paint(Tone::Label, text)
}

pub fn user<D: Display>(text: D) -> String {
    paint(Tone::User, text)
}

/// `[x]` for a completed checklist step, `[ ]` otherwise.
pub fn step_box(completed: bool) -> String {
    if completed {
        success("[x]")
    } else {
        dim("[ ]")
    }
}

/// Filled dot for the active panel, hollow for the rest.
pub fn panel_dot(active: bool) -> String {
    if active { success("●") } else { dim("○") }
}
