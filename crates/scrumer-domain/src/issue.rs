use chrono::{DateTime, Utc};
use scrumer_core::{LogEntry, Loggable, ScrumerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::field_update::FieldUpdate;
use crate::project::Project;
use crate::pull_request::PullRequestId;
use crate::sprint::SprintId;
use crate::user::UserId;

pub type IssueId = Uuid;

/// Workflow stage of an issue. Variants are declared in chain order, so the
/// derived `Ord` is the board's left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    #[serde(rename = "QA")]
    Qa,
    Done,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::ToDo,
        Status::InProgress,
        Status::Review,
        Status::Qa,
        Status::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Qa => "QA",
            Status::Done => "Done",
        }
    }

    /// Position in the chain, starting at zero.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Status> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Status> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ScrumerError;

    /// Accepts display names and loose spellings such as `in-progress` or `todo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "todo" => Ok(Status::ToDo),
            "inprogress" => Ok(Status::InProgress),
            "review" | "inreview" => Ok(Status::Review),
            "qa" => Ok(Status::Qa),
            "done" => Ok(Status::Done),
            _ => Err(ScrumerError::validation(format!(
                "Unknown status '{}'. Expected one of: To Do, In Progress, Review, QA, Done",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Highest,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Highest => "Highest",
        }
    }

    pub fn is_high(self) -> bool {
        self >= Priority::High
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ScrumerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "highest" => Ok(Priority::Highest),
            _ => Err(ScrumerError::validation(format!(
                "Unknown priority '{}'. Expected one of: Low, Medium, High, Highest",
                s
            ))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Where a freshly created issue lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// The active sprint if there is one, otherwise the backlog.
    #[default]
    ActiveSprint,
    Backlog,
}

/// User-supplied fields for a new issue. Identity, key, reporter and
/// timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: Option<UserId>,
    pub story_points: u32,
    pub placement: Placement,
}

impl IssueDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: Status::ToDo,
            priority: Priority::Medium,
            assignee: None,
            story_points: 1,
            placement: Placement::ActiveSprint,
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub key: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: Option<UserId>,
    pub reporter: UserId,
    pub story_points: u32,
    pub sprint_id: Option<SprintId>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestId>,
    #[serde(default)]
    pub activity: Vec<LogEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    pub fn new(
        project: &mut Project,
        draft: IssueDraft,
        reporter: UserId,
        sprint_id: Option<SprintId>,
    ) -> Self {
        let now = Utc::now();
        let key = project.allocate_issue_key();
        Self {
            id: Uuid::new_v4(),
            key,
            title: draft.title.trim().to_string(),
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            reporter,
            story_points: draft.story_points,
            sprint_id,
            pull_requests: Vec::new(),
            activity: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: Status) {
        if self.status != status {
            self.add_log(format!("Status changed from {} to {}", self.status, status));
        }
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn move_to_sprint(&mut self, sprint_id: Option<SprintId>) {
        if self.sprint_id != sprint_id {
            let message = match sprint_id {
                Some(id) => format!("Moved to sprint {}", id),
                None => "Returned to backlog".to_string(),
            };
            self.add_log(message);
        }
        self.sprint_id = sprint_id;
        self.updated_at = Utc::now();
    }

    pub fn is_scheduled(&self) -> bool {
        self.sprint_id.is_some()
    }

    pub fn matches_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key.trim())
    }

    /// Apply a partial update. Title changes must already be validated.
    pub fn update(&mut self, updates: IssueUpdate) {
        if let Some(title) = updates.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(priority) = updates.priority {
            self.priority = priority;
        }
        if let Some(points) = updates.story_points {
            self.story_points = points;
        }
        updates.assignee.apply_to(&mut self.assignee);
        if let Some(status) = updates.status {
            self.set_status(status);
        }
        self.updated_at = Utc::now();
    }
}

impl Loggable for Issue {
    fn add_log(&mut self, message: String) {
        self.activity.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.activity
    }
}

/// Partial update for an issue's editable fields.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: FieldUpdate<UserId>,
    pub story_points: Option<u32>,
}

impl IssueUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && !self.assignee.is_change()
            && self.story_points.is_none()
    }
}
