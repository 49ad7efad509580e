use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `GreenPath` - a conversational sustainability assistant for the terminal.
#[derive(Parser, Debug)]
#[command(name = "greenpath")]
#[command(version)]
#[command(about = "Ask sustainability questions and work the ESG panels they open.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.greenpath/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print events and snapshots as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (default)
    Chat,

    /// Ask one question, wait for the reply and any panel it opens
    Ask {
        /// The question to send
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the conversation starters
    Prompts,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }
}
