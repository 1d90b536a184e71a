//! Interactive command loop for the terminal host.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

use warpwrap_app::{
    handle_panel_message, open_preview_panel, undo_last_wrap, wrap_selection, Session,
};
use warpwrap_core::{EditorHost, Position, Selection};

use crate::host::{TerminalHost, CLEAR_VALUE};

const PROMPT: &str = "warpwrap> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Select(Vec<Selection>),
    Wrap,
    Undo,
    Panel,
    Message(String),
    Show,
    Save,
    Help,
    Quit,
}

fn parse_position(value: &str) -> Result<Position> {
    let (line, column) = value
        .split_once(':')
        .with_context(|| format!("Expected line:column, got \"{}\"", value))?;
    let line: usize = line
        .trim()
        .parse()
        .with_context(|| format!("Invalid line in \"{}\"", value))?;
    let column: usize = column
        .trim()
        .parse()
        .with_context(|| format!("Invalid column in \"{}\"", value))?;
    if line == 0 || column == 0 {
        anyhow::bail!("Lines and columns start at 1: \"{}\"", value);
    }
    Ok(Position::at(line - 1, column - 1))
}

/// Parse a 1-based `line:col-line:col` range, or `line:col` for a caret
pub fn parse_selection(value: &str) -> Result<Selection> {
    match value.split_once('-') {
        Some((anchor, active)) => Ok(Selection::new(
            parse_position(anchor)?,
            parse_position(active)?,
        )),
        None => Ok(Selection::caret(parse_position(value)?)),
    }
}

/// Parse one input line; `None` for a blank line
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" => return Ok(None),
        "select" | "s" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: select L:C-L:C [L:C-L:C ...]");
            }
            let selections = rest
                .split_whitespace()
                .map(parse_selection)
                .collect::<Result<Vec<_>>>()?;
            ReplCommand::Select(selections)
        }
        "wrap" | "w" => ReplCommand::Wrap,
        "undo" | "u" => ReplCommand::Undo,
        "panel" | "p" => ReplCommand::Panel,
        "message" | "m" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: message <json>");
            }
            ReplCommand::Message(rest.to_string())
        }
        "show" => ReplCommand::Show,
        "save" => ReplCommand::Save,
        "help" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        other => anyhow::bail!("Unknown command: {} (try `help`)", other),
    };
    Ok(Some(command))
}

fn help_text() -> String {
    format!(
        "\
Commands:
  select L:C-L:C ...   set selections (1-based, L:C alone is a caret)
  wrap                 wrap the selections in a tag
  undo                 undo the last wrap
  panel                write the preview panel and print its path
  message <json>       handle a message posted by the panel
  show                 print the document and selections
  save                 write the document back to its file
  help                 show this help
  quit                 leave

At a prompt, Enter keeps the value in brackets and `{}` clears it.",
        CLEAR_VALUE
    )
}

fn show<R: BufRead, W: Write>(host: &mut TerminalHost<R, W>) {
    let lines: Vec<String> = (0..host.buffer().line_count())
        .filter_map(|idx| {
            host.buffer()
                .line_text(idx)
                .map(|text| format!("{:>4} | {}", idx + 1, text))
        })
        .collect();
    for line in lines {
        host.say(line);
    }

    let selections: Vec<String> = host.selections().iter().map(|s| s.to_string()).collect();
    host.say(format!("selections: {}", selections.join(" ")).dark_grey());
}

fn save<R: BufRead, W: Write>(host: &mut TerminalHost<R, W>) -> Result<()> {
    host.buffer_mut().save()?;
    let path = host
        .buffer()
        .file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    warpwrap_logger::info(format!("Saved {}", path));
    host.say(format!("Saved {}", path));
    Ok(())
}

/// Read and run commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(host: &mut TerminalHost<R, W>, session: &mut Session) {
    host.say("Type `help` for commands.".dark_grey());

    while let Some(line) = host.ask(PROMPT) {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                host.say(format!("{:#}", e).yellow());
                continue;
            }
        };

        let outcome = match command {
            ReplCommand::Select(selections) => {
                host.set_selections(selections);
                continue;
            }
            ReplCommand::Wrap => wrap_selection(host, session),
            ReplCommand::Undo => undo_last_wrap(host, session),
            ReplCommand::Panel => open_preview_panel(host),
            ReplCommand::Message(raw) => handle_panel_message(host, session, &raw),
            ReplCommand::Show => {
                show(host);
                continue;
            }
            ReplCommand::Save => {
                if let Err(e) = save(host) {
                    warpwrap_logger::error(format!("Save failed: {:#}", e));
                    host.say(format!("Save failed: {:#}", e).red());
                }
                continue;
            }
            ReplCommand::Help => {
                host.say(help_text());
                continue;
            }
            ReplCommand::Quit => break,
        };
        warpwrap_logger::debug(format!("Command finished: {:?}", outcome));
    }

    if host.buffer().is_modified() {
        host.say("Unsaved changes discarded.".yellow());
    }
}
