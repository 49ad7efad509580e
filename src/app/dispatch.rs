use super::runtime::{self, AppHandle};
use super::status::render_status;
use super::actions::AppEvent;
use crate::cli::{Cli, Commands};
use crate::commands::{Command, CommandResult, HELP_LINES, parse_command};
use crate::config::Config;
use crate::observability::create_observer;
use crate::prompts::STARTER_PROMPTS;
use crate::session::Author;
use crate::ui::render::{Renderer, create_renderer, render_starters};
use crate::ui::style as ui;
use crate::widgets::checklist::STEP_COUNT;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command_or_default() {
        Commands::Chat => run_chat(&config, cli.json).await,
        Commands::Ask { text } => run_ask(&config, cli.json, &text.join(" ")).await,
        Commands::Prompts => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&STARTER_PROMPTS).context("Failed to encode starters")?
                );
            } else {
                println!("{}", render_starters());
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Interactive session over stdin.
async fn run_chat(config: &Config, json: bool) -> Result<()> {
    let mut repl = Repl::start(config, json);
    let mut events = repl.app.subscribe();

    if !json {
        println!();
        println!("  {} {}", ui::accent("*"), ui::header("Welcome to GreenPath!"));
        println!(
            "  {}",
            ui::dim("Ask a sustainability question, /help for commands, /quit to leave.")
        );
        if config.ui.show_starters {
            println!();
            println!("{}", render_starters());
        }
        println!();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,

            event = events.recv() => match event {
                Ok(event) => repl.print_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event stream lagged");
                }
                Err(RecvError::Closed) => break,
            },

            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                let result = repl.handle_line(&line).await?;
                if !result.text.is_empty() {
                    println!("{}", result.text);
                }
                if result.quit {
                    break;
                }
            }
        }
    }

    repl.app.shutdown().await;
    Ok(())
}

/// Submit once and wait for the reply, plus the panel it opens if any.
async fn run_ask(config: &Config, json: bool, text: &str) -> Result<()> {
    let mut repl = Repl::start(config, json);
    let mut events = repl.app.subscribe();
    repl.app.submit(text).await?;

    let mut awaiting = None;
    loop {
        let event = match events.recv().await {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event stream lagged");
                continue;
            }
            Err(RecvError::Closed) => break,
        };
        repl.print_event(&event);
        match &event {
            AppEvent::SubmissionRejected { .. } => break,
            AppEvent::TurnAppended { turn } if turn.author == Author::Assistant => {
                match turn.triggered_widget {
                    Some(widget) => awaiting = Some(widget),
                    None => break,
                }
            }
            AppEvent::WidgetActivated { widget, .. } if awaiting == Some(*widget) => break,
            _ => {}
        }
    }

    repl.app.shutdown().await;
    Ok(())
}

struct Repl<'a> {
    app: AppHandle,
    renderer: Box<dyn Renderer>,
    config: &'a Config,
    json: bool,
}

impl<'a> Repl<'a> {
    fn start(config: &'a Config, json: bool) -> Self {
        let json = json || config.ui.json;
        let observer = create_observer(&config.observability);
        tracing::debug!(observer = observer.name(), "starting orchestrator");
        Self {
            app: runtime::spawn(config.timing, observer),
            renderer: create_renderer(&config.ui, json),
            config,
            json,
        }
    }

    fn print_event(&self, event: &AppEvent) {
        if let Some(text) = self.renderer.event(event, &self.app.snapshot()) {
            println!("{text}");
        }
    }

    async fn handle_line(&self, line: &str) -> crate::Result<CommandResult> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                let text = line.trim();
                if !text.is_empty() {
                    self.app.submit(text).await?;
                }
                return Ok(CommandResult::silent());
            }
            Err(e) => return Ok(CommandResult::visible(ui::warn(e))),
        };

        let result = match command {
            Command::Explore => {
                self.app.explore().await?;
                CommandResult::silent()
            }
            Command::Prompts => CommandResult::visible(render_starters()),
            Command::Prompt { index } => {
                if index >= STARTER_PROMPTS.len() {
                    CommandResult::visible(ui::warn(format!(
                        "There are {} starters; see /prompts.",
                        STARTER_PROMPTS.len()
                    )))
                } else {
                    self.app.click_prompt(index).await?;
                    CommandResult::silent()
                }
            }
            Command::Toggle { step } => {
                if step == 0 || usize::from(step) > STEP_COUNT {
                    CommandResult::visible(ui::warn(format!(
                        "Checklist steps run from 1 to {STEP_COUNT}."
                    )))
                } else {
                    self.app.toggle_step(step).await?;
                    CommandResult::silent()
                }
            }
            Command::Set { field, value } => {
                self.app.edit_field(field, value).await?;
                CommandResult::silent()
            }
            Command::Dismiss => {
                self.app.dismiss_achievement().await?;
                CommandResult::silent()
            }
            Command::Voice => {
                self.app.toggle_voice().await?;
                CommandResult::silent()
            }
            Command::Status => {
                let snapshot = self.app.snapshot();
                if self.json {
                    CommandResult::visible(self.renderer.snapshot(&snapshot))
                } else {
                    CommandResult::visible(render_status(&snapshot, self.config))
                }
            }
            Command::Help => CommandResult::visible(help_text()),
            Command::Quit => CommandResult::quit(),
        };
        Ok(result)
    }
}

fn help_text() -> String {
    let mut lines = vec![ui::header("Commands")];
    lines.extend(
        HELP_LINES
            .iter()
            .map(|(usage, what)| format!("  {} {}", ui::accent(format!("{usage:22}")), ui::dim(what))),
    );
    lines.push(ui::dim("  Anything else is sent as a question."));
    lines.join("\n")
}
