use scrumer_core::{Decision, Prompter, ScrumerError, ScrumerResult};

use crate::commands::{
    Command, CommandContext, CompleteSprint, CreateIssue, CreateSprint, CreateTestCase,
    CycleTestStatus, DeleteIssue, MoveIssueToSprint, SetIssueStatus, SetTestStatus, StartSprint,
    UpdateIssue,
};
use crate::{
    Issue, IssueDraft, IssueId, IssueUpdate, Placement, Project, PullRequest, ScrumOperations,
    Sprint, SprintId, Status, StatusTransition, TestCase, TestCaseId, TestCategory, TestStatus,
    User,
};

pub const CONFIRM_DELETE_ISSUE: &str = "Permanently delete this issue?";
pub const CONFIRM_COMPLETE_SPRINT: &str =
    "Complete this sprint and move incomplete items to backlog?";
pub const PROMPT_SPRINT_NAME: &str = "Enter Sprint Name:";

/// Owner of every entity. Views borrow from it; all mutation goes through
/// `ScrumOperations`, which in turn runs domain commands.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub project: Project,
    pub users: Vec<User>,
    pub issues: Vec<Issue>,
    pub sprints: Vec<Sprint>,
    pub test_cases: Vec<TestCase>,
    pub pull_requests: Vec<PullRequest>,
}

impl Workspace {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            users: Vec::new(),
            issues: Vec::new(),
            sprints: Vec::new(),
            test_cases: Vec::new(),
            pull_requests: Vec::new(),
        }
    }

    pub fn execute(&mut self, command: Box<dyn Command>) -> ScrumerResult<()> {
        let mut ctx = CommandContext {
            project: &mut self.project,
            issues: &mut self.issues,
            sprints: &mut self.sprints,
            test_cases: &mut self.test_cases,
        };
        tracing::debug!(command = %command.description(), "executing command");
        command.execute(&mut ctx)
    }

    pub fn current_user(&self) -> &str {
        &self.project.current_user
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn pull_requests_for(&self, issue: &Issue) -> Vec<&PullRequest> {
        self.pull_requests
            .iter()
            .filter(|pr| issue.pull_requests.contains(&pr.id))
            .collect()
    }

    fn active_sprint_id(&self) -> Option<SprintId> {
        self.sprints.iter().find(|s| s.is_active()).map(|s| s.id)
    }

    fn issue_exists(&self, id: IssueId) -> bool {
        self.issues.iter().any(|i| i.id == id)
    }

    fn require_sprint(&self, id: SprintId) -> ScrumerResult<&Sprint> {
        self.sprints
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ScrumerError::not_found(format!("Sprint {}", id)))
    }

    fn require_test_case(&self, id: TestCaseId) -> ScrumerResult<TestCase> {
        self.test_cases
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ScrumerError::not_found(format!("Test case {}", id)))
    }

    /// Run `command` against an issue if it exists and hand back the result.
    fn mutate_issue(&mut self, id: IssueId, command: Box<dyn Command>) -> ScrumerResult<Option<Issue>> {
        if !self.issue_exists(id) {
            return Ok(None);
        }
        self.execute(command)?;
        self.get_issue(id)
    }
}

impl ScrumOperations for Workspace {
    fn create_issue(&mut self, draft: IssueDraft) -> ScrumerResult<Issue> {
        if !draft.has_title() {
            return Err(ScrumerError::validation("Issue title is required"));
        }
        let sprint_id = match draft.placement {
            Placement::ActiveSprint => self.active_sprint_id(),
            Placement::Backlog => None,
        };
        let cmd = CreateIssue {
            draft,
            reporter: self.project.default_reporter.clone(),
            sprint_id,
        };
        self.execute(Box::new(cmd))?;
        self.issues
            .last()
            .cloned()
            .ok_or_else(|| ScrumerError::Internal("Failed to create issue".to_string()))
    }

    fn list_issues(&self) -> ScrumerResult<Vec<Issue>> {
        Ok(self.issues.clone())
    }

    fn get_issue(&self, id: IssueId) -> ScrumerResult<Option<Issue>> {
        Ok(self.issues.iter().find(|i| i.id == id).cloned())
    }

    fn find_issue_by_key(&self, key: &str) -> ScrumerResult<Option<Issue>> {
        Ok(self.issues.iter().find(|i| i.matches_key(key)).cloned())
    }

    fn update_issue(&mut self, id: IssueId, updates: IssueUpdate) -> ScrumerResult<Option<Issue>> {
        if let Some(ref title) = updates.title {
            if title.trim().is_empty() {
                return Err(ScrumerError::validation("Issue title is required"));
            }
        }
        self.mutate_issue(
            id,
            Box::new(UpdateIssue {
                issue_id: id,
                updates,
            }),
        )
    }

    fn delete_issue(&mut self, id: IssueId, prompter: &mut dyn Prompter) -> ScrumerResult<Decision> {
        if !self.issue_exists(id) {
            return Err(ScrumerError::not_found(format!("Issue {}", id)));
        }
        if !prompter.confirm(CONFIRM_DELETE_ISSUE) {
            return Ok(Decision::Declined);
        }
        self.execute(Box::new(DeleteIssue { issue_id: id }))?;
        Ok(Decision::Applied)
    }

    fn set_status(&mut self, id: IssueId, status: Status) -> ScrumerResult<Option<Issue>> {
        self.mutate_issue(id, Box::new(SetIssueStatus { issue_id: id, status }))
    }

    fn apply_transition(&mut self, transition: StatusTransition) -> ScrumerResult<Option<Issue>> {
        self.set_status(transition.issue_id, transition.to)
    }

    fn move_to_sprint(
        &mut self,
        id: IssueId,
        sprint_id: Option<SprintId>,
    ) -> ScrumerResult<Option<Issue>> {
        if let Some(sprint_id) = sprint_id {
            self.require_sprint(sprint_id)?;
        }
        self.mutate_issue(
            id,
            Box::new(MoveIssueToSprint {
                issue_id: id,
                sprint_id,
            }),
        )
    }

    fn create_sprint(&mut self, name: &str) -> ScrumerResult<Sprint> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScrumerError::validation("Sprint name is required"));
        }
        let cmd = CreateSprint {
            name: name.to_string(),
            length_days: self.project.sprint_length_days,
        };
        self.execute(Box::new(cmd))?;
        self.sprints
            .last()
            .cloned()
            .ok_or_else(|| ScrumerError::Internal("Failed to create sprint".to_string()))
    }

    fn create_sprint_interactive(&mut self, prompter: &mut dyn Prompter) -> ScrumerResult<Option<Sprint>> {
        match prompter.prompt(PROMPT_SPRINT_NAME) {
            Some(name) if !name.trim().is_empty() => self.create_sprint(&name).map(Some),
            _ => Ok(None),
        }
    }

    fn list_sprints(&self) -> ScrumerResult<Vec<Sprint>> {
        Ok(self.sprints.clone())
    }

    fn get_sprint(&self, id: SprintId) -> ScrumerResult<Option<Sprint>> {
        Ok(self.sprints.iter().find(|s| s.id == id).cloned())
    }

    fn active_sprint(&self) -> ScrumerResult<Option<Sprint>> {
        Ok(self.sprints.iter().find(|s| s.is_active()).cloned())
    }

    fn start_sprint(&mut self, id: SprintId) -> ScrumerResult<Sprint> {
        self.require_sprint(id)?;
        self.execute(Box::new(StartSprint { sprint_id: id }))?;
        self.require_sprint(id).cloned()
    }

    fn complete_sprint(&mut self, id: SprintId, prompter: &mut dyn Prompter) -> ScrumerResult<Decision> {
        self.require_sprint(id)?;
        if !prompter.confirm(CONFIRM_COMPLETE_SPRINT) {
            return Ok(Decision::Declined);
        }
        self.execute(Box::new(CompleteSprint { sprint_id: id }))?;
        Ok(Decision::Applied)
    }

    fn create_test_case(&mut self, title: &str, linked_issue_key: &str) -> ScrumerResult<TestCase> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ScrumerError::validation("Test case title is required"));
        }
        let cmd = CreateTestCase {
            title: title.to_string(),
            linked_issue_key: linked_issue_key.trim().to_string(),
        };
        self.execute(Box::new(cmd))?;
        self.test_cases
            .first()
            .cloned()
            .ok_or_else(|| ScrumerError::Internal("Failed to create test case".to_string()))
    }

    fn list_test_cases(&self, category: Option<TestCategory>) -> ScrumerResult<Vec<TestCase>> {
        Ok(self
            .test_cases
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }

    fn linked_test_cases(&self, issue_key: &str) -> ScrumerResult<Vec<TestCase>> {
        Ok(self
            .test_cases
            .iter()
            .filter(|t| t.is_linked_to(issue_key))
            .cloned()
            .collect())
    }

    fn cycle_test_status(&mut self, id: TestCaseId) -> ScrumerResult<TestCase> {
        self.require_test_case(id)?;
        self.execute(Box::new(CycleTestStatus { test_case_id: id }))?;
        self.require_test_case(id)
    }

    fn mark_test_passed(&mut self, id: TestCaseId) -> ScrumerResult<TestCase> {
        self.require_test_case(id)?;
        self.execute(Box::new(SetTestStatus {
            test_case_id: id,
            status: TestStatus::Pass,
        }))?;
        self.require_test_case(id)
    }
}
