use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `GreenPath`.
///
/// The interaction model itself is total; errors only surface at the edges
/// (configuration, the runtime task, terminal commands). Library callers can
/// match on these, internal code uses `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum GreenpathError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Orchestrator runtime ────────────────────────────────────────────
    #[error("runtime: {0}")]
    Runtime(#[from] RuntimeError),

    // ── Terminal commands ───────────────────────────────────────────────
    #[error("command: {0}")]
    Command(#[from] CommandError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Runtime errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("orchestrator is shut down")]
    Closed,
}

// ─── Command errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try /help)")]
    Unknown(String),

    #[error("{command} needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{command}: invalid argument '{value}'")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

/// Convenience alias used across the crate.
pub type Result<T, E = GreenpathError> = std::result::Result<T, E>;
