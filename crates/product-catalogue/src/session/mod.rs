//! Interactive filter session.
//!
//! Each input line is one user action: pick an owner tab, type into the
//! search box, clear it, or reset everything. After every action the view is
//! derived afresh and rendered. The binary wires this to stdin and stdout;
//! tests drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::config::OutputFormat;
use crate::render::{RenderOptions, render_json, render_text};
use crate::state::ProductList;

const HELP: &str = concat!(
    "Commands:\n",
    "  all              Show every owner\n",
    "  owner <name>     Show products owned by <name>\n",
    "  search <text>    Filter by product or owner name\n",
    "  clear            Clear the search text\n",
    "  reset            Reset all filters\n",
    "  show             Render the current listing\n",
    "  help             Print this help output\n",
    "  quit, exit       Leave the session\n",
);

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select an owner; empty selects "All".
    SelectOwner(String),
    /// Replace the search query.
    Search(String),
    /// Clear the search query.
    ClearQuery,
    /// Clear both filters.
    ResetAll,
    /// Render without changing state.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Errors surfaced while parsing or running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The command word is not recognised.
    #[error("unknown command: {value}")]
    UnknownCommand {
        /// The unrecognised word.
        value: String,
    },
    /// A command that needs an argument was given none.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command lacking its argument.
        command: &'static str,
    },
    /// The view could not be serialised.
    #[error("failed to render view: {0}")]
    Render(#[from] serde_json::Error),
    /// Reading input or writing output failed.
    #[error("session I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How the session writes each derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutput {
    /// Table or JSON.
    pub format: OutputFormat,
    /// Text rendering options.
    pub render: RenderOptions,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines. Everything after the command word is
/// passed through as the argument; the search text is kept verbatim so the
/// filter's own trimming applies.
///
/// # Errors
///
/// Returns [`SessionError::UnknownCommand`] or
/// [`SessionError::MissingArgument`].
///
/// # Example
///
/// ```
/// use product_catalogue::session::{Command, parse_command};
///
/// let command = parse_command("owner Anna").expect("parse");
/// assert_eq!(command, Some(Command::SelectOwner("Anna".to_owned())));
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, SessionError> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or_else(|| (trimmed.trim_end(), ""));
    let command = match word.to_ascii_lowercase().as_str() {
        "all" => Command::SelectOwner(String::new()),
        "owner" => Command::SelectOwner(required(rest.trim(), "owner")?.to_owned()),
        "search" => {
            let text = rest.trim_end_matches(['\r', '\n']);
            Command::Search(required(text, "search")?.to_owned())
        }
        "clear" => Command::ClearQuery,
        "reset" => Command::ResetAll,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            return Err(SessionError::UnknownCommand {
                value: word.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

/// Applies a command to the listing state.
///
/// Returns `false` when the command ends the session.
pub fn apply_command(list: &mut ProductList, command: &Command) -> bool {
    match command {
        Command::SelectOwner(name) => list.select_owner(name.clone()),
        Command::Search(text) => list.set_query(text.clone()),
        Command::ClearQuery => list.clear_query(),
        Command::ResetAll => list.reset_all(),
        Command::Show | Command::Help => {}
        Command::Quit => return false,
    }
    true
}

/// Writes the view derived from the current state.
///
/// # Errors
///
/// Returns [`SessionError`] if serialisation or writing fails.
pub fn write_view<W: Write>(
    list: &ProductList,
    output: SessionOutput,
    out: &mut W,
) -> Result<(), SessionError> {
    let view = list.view();
    let rendered = match output.format {
        OutputFormat::Table => render_text(&view, output.render),
        OutputFormat::Json => {
            let mut json = render_json(&view)?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Runs the command loop until `quit` or end of input.
///
/// Parse errors are reported on `out` and the loop continues; I/O and
/// rendering failures end the session.
///
/// # Errors
///
/// Returns [`SessionError::Io`] or [`SessionError::Render`].
pub fn run_session<R: BufRead, W: Write>(
    list: &mut ProductList,
    input: R,
    out: &mut W,
    output: SessionOutput,
) -> Result<(), SessionError> {
    for line_result in input.lines() {
        let line = line_result?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        if command == Command::Help {
            out.write_all(HELP.as_bytes())?;
            continue;
        }
        if !apply_command(list, &command) {
            break;
        }
        write_view(list, output, out)?;
        out.flush()?;
    }
    Ok(())
}

fn required<'a>(value: &'a str, command: &'static str) -> Result<&'a str, SessionError> {
    if value.trim().is_empty() {
        Err(SessionError::MissingArgument { command })
    } else {
        Ok(value)
    }
}
