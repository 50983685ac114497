pub mod board_view;
pub mod column;
pub mod commands;
pub mod field_update;
pub mod filter;
pub mod issue;
pub mod operations;
pub mod project;
pub mod pull_request;
pub mod query;
pub mod search;
pub mod seed;
pub mod sprint;
pub mod test_case;
pub mod user;
pub mod workspace;

pub use board_view::{drop_on_column, BoardView, DragState, QuickStep, StatusTransition};
pub use column::{Column, COLUMNS};
pub use field_update::FieldUpdate;
pub use filter::{IssueQuery, QuickFilter};
pub use issue::{Issue, IssueDraft, IssueId, IssueUpdate, Placement, Priority, Status};
pub use operations::ScrumOperations;
pub use project::Project;
pub use pull_request::{PullRequest, PullRequestId, PullRequestStatus};
pub use query::PlanningView;
pub use sprint::{Sprint, SprintId, SprintStatus};
pub use test_case::{TestCase, TestCaseId, TestCategory, TestStatus, TestStep, TestTool};
pub use user::{User, UserId};
pub use workspace::Workspace;
