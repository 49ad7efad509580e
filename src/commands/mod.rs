pub mod parser;
pub mod types;

pub use parser::parse_command;
pub use types::{Command, CommandResult};

/// One line per slash command, shown by `/help`.
pub const HELP_LINES: [(&str, &str); 10] = [
    ("/explore", "open the conversation"),
    ("/prompts", "list conversation starters"),
    ("/prompt <n>", "send starter number n"),
    ("/toggle <step>", "tick or untick an LED checklist step"),
    (
        "/set <field> <value>",
        "edit a panel field (electricity, gas, transport, waste, employees, industry, renewable, waste-reduction)",
    ),
    ("/dismiss", "dismiss the current achievement"),
    ("/voice", "toggle voice listening"),
    ("/status", "show panels and session state"),
    ("/help", "show this help"),
    ("/quit", "leave the session"),
];
