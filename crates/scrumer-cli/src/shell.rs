//! Line-oriented interactive shell over one live session.

use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::{ShellCommand, ShellLine};
use crate::context::Session;
use crate::{handlers, output};

const PROMPT: &str = "scrumer> ";

/// Split a command line into words. Single and double quotes group words;
/// a backslash escapes the next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('\''), _) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), _) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Read commands from stdin until end of input or `exit`.
pub async fn run(session: &mut Session) -> anyhow::Result<()> {
    tracing::debug!("shell started");
    loop {
        eprint!("{}", PROMPT);
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                output::print_error(&e);
                continue;
            }
        };

        match ShellLine::try_parse_from(words) {
            Ok(ShellLine {
                command: ShellCommand::Exit,
            }) => break,
            Ok(ShellLine {
                command: ShellCommand::Workspace(command),
            }) => match handlers::dispatch(session, command).await {
                Ok(data) => output::output_success(data),
                Err(e) => output::print_error(&e.to_string()),
            },
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let _ = e.print();
            }
            Err(e) => output::print_error(e.to_string().trim_end()),
        }
    }
    tracing::debug!("shell finished");
    Ok(())
}
