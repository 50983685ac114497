use std::io::{self, Write};

use scrumer_core::Prompter;

/// Prompter over the process's stdin/stderr. Questions go to stderr so
/// stdout carries only JSON responses.
pub struct StdioPrompter {
    assume_yes: bool,
}

impl StdioPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Next line from stdin without its line ending, `None` at end of input.
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }
}

impl Prompter for StdioPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            eprintln!("{} [y/N] y", message);
            return true;
        }
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        matches!(
            self.read_line().map(|l| l.trim().to_ascii_lowercase()).as_deref(),
            Some("y") | Some("yes")
        )
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        eprint!("{} ", message);
        let _ = io::stderr().flush();
        self.read_line()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
