use anyhow::anyhow;
use scrumer_assist::{AssistClient, InsightSlot, IssueSuggestion};
use scrumer_core::{AppConfig, Prompter};
use scrumer_domain::{DragState, Issue, IssueQuery, ScrumOperations, Sprint, TestCase, Workspace};
use uuid::Uuid;

/// Everything one CLI run or one shell session works against.
pub struct Session {
    pub workspace: Workspace,
    pub query: IssueQuery,
    pub drag: DragState,
    pub prompter: Box<dyn Prompter>,
    pub assist: AssistClient,
    pub summary: InsightSlot<String>,
    pub suggestion: InsightSlot<IssueSuggestion>,
}

impl Session {
    pub fn new(config: &AppConfig, prompter: Box<dyn Prompter>) -> Self {
        Self {
            workspace: Workspace::seeded(config),
            query: IssueQuery::new(),
            drag: DragState::new(),
            prompter,
            assist: AssistClient::from_config(config),
            summary: InsightSlot::new(),
            suggestion: InsightSlot::new(),
        }
    }

    /// Resolve an issue by id or key.
    pub fn resolve_issue(&self, reference: &str) -> anyhow::Result<Issue> {
        let found = match Uuid::parse_str(reference.trim()) {
            Ok(id) => self.workspace.get_issue(id)?,
            Err(_) => self.workspace.find_issue_by_key(reference)?,
        };
        found.ok_or_else(|| anyhow!("Issue not found: {}", reference))
    }

    /// Resolve a sprint by id, case-insensitive name, or `active`.
    pub fn resolve_sprint(&self, reference: &str) -> anyhow::Result<Sprint> {
        let reference = reference.trim();
        let found = if reference.eq_ignore_ascii_case("active") {
            self.workspace.active_sprint()?
        } else if let Ok(id) = Uuid::parse_str(reference) {
            self.workspace.get_sprint(id)?
        } else {
            self.workspace
                .list_sprints()?
                .into_iter()
                .find(|s| s.name.eq_ignore_ascii_case(reference))
        };
        found.ok_or_else(|| anyhow!("Sprint not found: {}", reference))
    }

    /// Resolve a test case by id or key.
    pub fn resolve_test_case(&self, reference: &str) -> anyhow::Result<TestCase> {
        let reference = reference.trim();
        let by_id = Uuid::parse_str(reference).ok();
        self.workspace
            .list_test_cases(None)?
            .into_iter()
            .find(|t| match by_id {
                Some(id) => t.id == id,
                None => t.key.eq_ignore_ascii_case(reference),
            })
            .ok_or_else(|| anyhow!("Test case not found: {}", reference))
    }
}
