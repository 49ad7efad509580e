use super::types::Command;
use crate::error::CommandError;
use crate::widgets::FieldRef;

/// Parse one input line.
///
/// `Ok(None)` means the line is plain text to submit.
pub fn parse_command(input: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Ok(None);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let args = parts.next().unwrap_or("").trim();

    let command = match cmd.as_str() {
        "/explore" | "/start" => Command::Explore,
        "/prompts" => Command::Prompts,
        "/prompt" => Command::Prompt {
            index: parse_prompt_number(args)?,
        },
        "/toggle" => Command::Toggle {
            step: parse_step(args)?,
        },
        "/set" => parse_set(args)?,
        "/dismiss" => Command::Dismiss,
        "/voice" | "/mic" => Command::Voice,
        "/status" => Command::Status,
        "/help" | "/?" => Command::Help,
        "/quit" | "/exit" | "/q" => Command::Quit,
        _ => return Err(CommandError::Unknown(cmd)),
    };
    Ok(Some(command))
}

fn parse_prompt_number(args: &str) -> Result<usize, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "/prompt",
            expected: "a prompt number (see /prompts)",
        });
    }
    match args.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidArgument {
            command: "/prompt",
            value: args.to_string(),
        }),
    }
}

fn parse_step(args: &str) -> Result<u8, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "/toggle",
            expected: "a checklist step number",
        });
    }
    args.parse::<u8>()
        .map_err(|_| CommandError::InvalidArgument {
            command: "/toggle",
            value: args.to_string(),
        })
}

fn parse_set(args: &str) -> Result<Command, CommandError> {
    let mut parts = args.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    if name.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "/set",
            expected: "a field name and a value",
        });
    }
    let field = FieldRef::from_name(name).ok_or_else(|| CommandError::InvalidArgument {
        command: "/set",
        value: name.to_string(),
    })?;
    // A missing value clears the field; numeric fields read it as 0.
    let value = parts.next().unwrap_or("").trim();
    Ok(Command::Set {
        field,
        value: value.to_string(),
    })
}
