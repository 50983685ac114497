//! Filter state shared by the board and the backlog.

use scrumer_core::ScrumerError;
use serde::Serialize;
use std::str::FromStr;

use super::issue_filter::{AssigneeFilter, HighPriorityFilter, IssueFilter};
use crate::search::{CompositeSearcher, IssueSearcher};
use crate::Issue;

/// Mutually exclusive one-click filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    /// Issues assigned to the current user.
    Mine,
    /// Issues with priority High or Highest.
    HighPriority,
}

impl FromStr for QuickFilter {
    type Err = ScrumerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mine" | "my-tasks" => Ok(QuickFilter::Mine),
            "priority" | "high-priority" | "high" => Ok(QuickFilter::HighPriority),
            _ => Err(ScrumerError::validation(format!(
                "Unknown quick filter '{}'. Expected 'mine' or 'high-priority'",
                s
            ))),
        }
    }
}

/// Free-text search plus at most one quick filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueQuery {
    search: String,
    quick_filter: Option<QuickFilter>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn quick_filter(&self) -> Option<QuickFilter> {
        self.quick_filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Selecting the active quick filter clears it; selecting another one
    /// replaces it. Two quick filters are never active together.
    pub fn toggle(&mut self, filter: QuickFilter) {
        self.quick_filter = if self.quick_filter == Some(filter) {
            None
        } else {
            Some(filter)
        };
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.quick_filter = None;
    }

    /// `current_user` is the id the `Mine` filter compares assignees against.
    pub fn matches(&self, issue: &Issue, current_user: &str) -> bool {
        if !CompositeSearcher::all(&self.search).matches(issue) {
            return false;
        }
        match self.quick_filter {
            Some(QuickFilter::Mine) => AssigneeFilter::new(current_user).matches(issue),
            Some(QuickFilter::HighPriority) => HighPriorityFilter.matches(issue),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IssueDraft, Priority, Project};
    use scrumer_core::AppConfig;

    fn issue(title: &str, priority: Priority, assignee: Option<&str>) -> Issue {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let mut draft = IssueDraft::new(title);
        draft.priority = priority;
        draft.assignee = assignee.map(str::to_string);
        Issue::new(&mut project, draft, "u1".to_string(), None)
    }

    #[test]
    fn test_default_matches_everything() {
        let query = IssueQuery::default();
        assert_eq!(query.search(), "");
        assert_eq!(query.quick_filter(), None);
        assert!(query.matches(&issue("Anything", Priority::Low, None), "u1"));
    }

    #[test]
    fn test_toggle_same_filter_clears_it() {
        let mut query = IssueQuery::new();
        query.toggle(QuickFilter::Mine);
        assert_eq!(query.quick_filter(), Some(QuickFilter::Mine));
        query.toggle(QuickFilter::Mine);
        assert_eq!(query.quick_filter(), None);
    }

    #[test]
    fn test_toggle_other_filter_replaces_it() {
        let mut query = IssueQuery::new();
        query.toggle(QuickFilter::Mine);
        query.toggle(QuickFilter::HighPriority);
        assert_eq!(query.quick_filter(), Some(QuickFilter::HighPriority));

        let mine_low = issue("Mine", Priority::Low, Some("u1"));
        assert!(!query.matches(&mine_low, "u1"));
    }

    #[test]
    fn test_search_and_quick_filter_intersect() {
        let mut query = IssueQuery::new();
        query.set_search("auth");
        query.toggle(QuickFilter::HighPriority);

        assert!(query.matches(&issue("Refactor Auth", Priority::High, None), "u1"));
        assert!(!query.matches(&issue("Refactor Auth", Priority::Low, None), "u1"));
        assert!(!query.matches(&issue("Board", Priority::Highest, None), "u1"));
    }

    #[test]
    fn test_mine_uses_current_user() {
        let mut query = IssueQuery::new();
        query.toggle(QuickFilter::Mine);
        let assigned = issue("Task", Priority::Low, Some("u2"));
        assert!(query.matches(&assigned, "u2"));
        assert!(!query.matches(&assigned, "u1"));
    }

    #[test]
    fn test_clear() {
        let mut query = IssueQuery::new();
        query.set_search("x");
        query.toggle(QuickFilter::Mine);
        query.clear();
        assert_eq!(query, IssueQuery::new());
    }

    #[test]
    fn test_quick_filter_parsing() {
        assert_eq!("mine".parse::<QuickFilter>().unwrap(), QuickFilter::Mine);
        assert_eq!(
            "high-priority".parse::<QuickFilter>().unwrap(),
            QuickFilter::HighPriority
        );
        assert!("everything".parse::<QuickFilter>().is_err());
    }
}
