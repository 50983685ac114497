//! Issue queries for the backlog and the sprint planner.
//!
//! Plain functions over borrowed slices; nothing here mutates state.

pub mod sprint;

pub use sprint::{calculate_points, partition_sprint_issues, sprint_issues, PlanningView, SprintPlan};

use crate::filter::{IssueFilter, IssueQuery, UnscheduledFilter};
use crate::Issue;

/// Issues with no sprint that pass the search and quick filter.
pub fn backlog<'a>(issues: &'a [Issue], query: &IssueQuery, current_user: &str) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|i| UnscheduledFilter.matches(i) && query.matches(i, current_user))
        .collect()
}

/// Every issue that passes the search and quick filter, in insertion order.
pub fn filter_issues<'a>(
    issues: &'a [Issue],
    query: &IssueQuery,
    current_user: &str,
) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|i| query.matches(i, current_user))
        .collect()
}
