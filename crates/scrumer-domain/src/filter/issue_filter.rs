//! Issue filter predicates.
//!
//! Each filter answers one yes/no question about an issue.

use crate::{Issue, SprintId};

/// Trait for filtering issues by various criteria.
pub trait IssueFilter {
    /// Returns true if the issue matches the filter criteria.
    fn matches(&self, issue: &Issue) -> bool;
}

/// Issues attached to one sprint.
pub struct SprintFilter {
    sprint_id: SprintId,
}

impl SprintFilter {
    pub fn new(sprint_id: SprintId) -> Self {
        Self { sprint_id }
    }
}

impl IssueFilter for SprintFilter {
    fn matches(&self, issue: &Issue) -> bool {
        issue.sprint_id == Some(self.sprint_id)
    }
}

/// Issues not attached to any sprint, i.e. the backlog.
pub struct UnscheduledFilter;

impl IssueFilter for UnscheduledFilter {
    fn matches(&self, issue: &Issue) -> bool {
        !issue.is_scheduled()
    }
}

/// Issues assigned to a given user.
pub struct AssigneeFilter {
    user_id: String,
}

impl AssigneeFilter {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl IssueFilter for AssigneeFilter {
    fn matches(&self, issue: &Issue) -> bool {
        issue.assignee.as_deref() == Some(self.user_id.as_str())
    }
}

/// Issues with priority High or Highest.
pub struct HighPriorityFilter;

impl IssueFilter for HighPriorityFilter {
    fn matches(&self, issue: &Issue) -> bool {
        issue.priority.is_high()
    }
}
