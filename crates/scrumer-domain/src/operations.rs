use crate::{
    Issue, IssueDraft, IssueId, IssueUpdate, Sprint, SprintId, Status, StatusTransition, TestCase,
    TestCaseId, TestCategory,
};
use scrumer_core::{Decision, Prompter, ScrumerResult};

/// Every operation the dashboard can perform against its state.
///
/// Updates on identities that are not present return `Ok(None)` and change
/// nothing. Destructive operations ask the `Prompter` first.
pub trait ScrumOperations {
    // Issue operations
    fn create_issue(&mut self, draft: IssueDraft) -> ScrumerResult<Issue>;
    fn list_issues(&self) -> ScrumerResult<Vec<Issue>>;
    fn get_issue(&self, id: IssueId) -> ScrumerResult<Option<Issue>>;
    fn find_issue_by_key(&self, key: &str) -> ScrumerResult<Option<Issue>>;
    fn update_issue(&mut self, id: IssueId, updates: IssueUpdate) -> ScrumerResult<Option<Issue>>;
    fn delete_issue(&mut self, id: IssueId, prompter: &mut dyn Prompter) -> ScrumerResult<Decision>;
    fn set_status(&mut self, id: IssueId, status: Status) -> ScrumerResult<Option<Issue>>;
    fn apply_transition(&mut self, transition: StatusTransition) -> ScrumerResult<Option<Issue>>;
    fn move_to_sprint(
        &mut self,
        id: IssueId,
        sprint_id: Option<SprintId>,
    ) -> ScrumerResult<Option<Issue>>;

    // Sprint operations
    fn create_sprint(&mut self, name: &str) -> ScrumerResult<Sprint>;
    fn create_sprint_interactive(&mut self, prompter: &mut dyn Prompter) -> ScrumerResult<Option<Sprint>>;
    fn list_sprints(&self) -> ScrumerResult<Vec<Sprint>>;
    fn get_sprint(&self, id: SprintId) -> ScrumerResult<Option<Sprint>>;
    fn active_sprint(&self) -> ScrumerResult<Option<Sprint>>;
    fn start_sprint(&mut self, id: SprintId) -> ScrumerResult<Sprint>;
    fn complete_sprint(&mut self, id: SprintId, prompter: &mut dyn Prompter) -> ScrumerResult<Decision>;

    // Test case operations
    fn create_test_case(&mut self, title: &str, linked_issue_key: &str) -> ScrumerResult<TestCase>;
    fn list_test_cases(&self, category: Option<TestCategory>) -> ScrumerResult<Vec<TestCase>>;
    fn linked_test_cases(&self, issue_key: &str) -> ScrumerResult<Vec<TestCase>>;
    fn cycle_test_status(&mut self, id: TestCaseId) -> ScrumerResult<TestCase>;
    fn mark_test_passed(&mut self, id: TestCaseId) -> ScrumerResult<TestCase>;
}
