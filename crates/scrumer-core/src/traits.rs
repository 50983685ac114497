use std::collections::VecDeque;

use serde::Serialize;

/// Outcome of an action that required the user's consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Applied,
    Declined,
}

impl Decision {
    pub fn is_applied(self) -> bool {
        matches!(self, Decision::Applied)
    }
}

/// Interactive seam for confirmations, free-text prompts and blocking alerts.
///
/// Destructive operations ask through this trait instead of talking to a
/// terminal directly, so the domain stays testable and front-end agnostic.
pub trait Prompter {
    /// Ask a yes/no question. Returning `false` must leave state untouched.
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for a line of text. `None` means the user cancelled.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Prompter that replays canned answers, in order.
///
/// Unanswered confirmations decline and unanswered prompts cancel.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirmations: VecDeque<bool>,
    answers: VecDeque<String>,
    alerts: Vec<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn answering(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(answer.into());
        self
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Every confirmation and prompt message seen so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
