use chrono::{DateTime, Utc};
use scrumer_core::AppConfig;
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Workspace-wide settings and key counters.
///
/// Keys are allocated from monotonic counters rather than from the size of
/// the collection, so a key is never handed out twice even after deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub issue_key_prefix: String,
    pub test_key_prefix: String,
    #[serde(default = "default_next_number")]
    pub next_issue_number: u32,
    #[serde(default = "default_next_number")]
    pub next_test_number: u32,
    pub sprint_length_days: u32,
    pub current_user: UserId,
    pub default_reporter: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_next_number() -> u32 {
    1
}

impl Project {
    pub fn from_config(name: impl Into<String>, config: &AppConfig) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            issue_key_prefix: config.effective_issue_key_prefix().to_string(),
            test_key_prefix: config.effective_test_key_prefix().to_string(),
            next_issue_number: 1,
            next_test_number: 1,
            sprint_length_days: config.effective_sprint_length_days(),
            current_user: config.effective_current_user().to_string(),
            default_reporter: config.effective_default_reporter().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn allocate_issue_key(&mut self) -> String {
        let number = self.next_issue_number;
        self.next_issue_number += 1;
        self.updated_at = Utc::now();
        format!("{}-{}", self.issue_key_prefix, number)
    }

    pub fn allocate_test_key(&mut self) -> String {
        let number = self.next_test_number;
        self.next_test_number += 1;
        self.updated_at = Utc::now();
        format!("{}-{}", self.test_key_prefix, number)
    }
}
