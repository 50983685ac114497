//! Issue filtering functionality.
//!
//! Predicate types live in `issue_filter`; the user-facing filter state
//! (search text plus one quick filter) lives in `issue_query`.

pub mod issue_filter;
pub mod issue_query;

pub use issue_filter::{
    AssigneeFilter, HighPriorityFilter, IssueFilter, SprintFilter, UnscheduledFilter,
};
pub use issue_query::{IssueQuery, QuickFilter};
