use serde::{Deserialize, Serialize};

use crate::user::UserId;

pub type PullRequestId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullRequestStatus {
    Open,
    Merged,
    Draft,
    Closed,
}

/// Static display record for a linked pull request. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: PullRequestId,
    pub number: u32,
    pub title: String,
    pub status: PullRequestStatus,
    pub repo: String,
    pub author: UserId,
    /// Relative age label, e.g. "2h ago".
    pub updated: String,
}
