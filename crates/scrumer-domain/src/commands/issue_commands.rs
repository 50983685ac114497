use super::{Command, CommandContext};
use crate::{IssueDraft, IssueUpdate, SprintId, Status, UserId};
use scrumer_core::ScrumerResult;
use uuid::Uuid;

/// Append a new issue with the next key.
pub struct CreateIssue {
    pub draft: IssueDraft,
    pub reporter: UserId,
    pub sprint_id: Option<SprintId>,
}

impl Command for CreateIssue {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        let issue = crate::Issue::new(
            context.project,
            self.draft.clone(),
            self.reporter.clone(),
            self.sprint_id,
        );
        context.issues.push(issue);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create issue: '{}'", self.draft.title)
    }
}

/// Update issue properties (title, description, priority, status, etc.)
pub struct UpdateIssue {
    pub issue_id: Uuid,
    pub updates: IssueUpdate,
}

impl Command for UpdateIssue {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(issue) = context.issues.iter_mut().find(|i| i.id == self.issue_id) {
            issue.update(self.updates.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Update issue".to_string()
    }
}

/// Move an issue to another column. Any status may follow any status.
pub struct SetIssueStatus {
    pub issue_id: Uuid,
    pub status: Status,
}

impl Command for SetIssueStatus {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(issue) = context.issues.iter_mut().find(|i| i.id == self.issue_id) {
            issue.set_status(self.status);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set issue {} status to {}", self.issue_id, self.status)
    }
}

/// Attach an issue to a sprint, or return it to the backlog with `None`.
pub struct MoveIssueToSprint {
    pub issue_id: Uuid,
    pub sprint_id: Option<SprintId>,
}

impl Command for MoveIssueToSprint {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(issue) = context.issues.iter_mut().find(|i| i.id == self.issue_id) {
            issue.move_to_sprint(self.sprint_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        match self.sprint_id {
            Some(sprint_id) => format!("Move issue {} to sprint {}", self.issue_id, sprint_id),
            None => format!("Move issue {} to backlog", self.issue_id),
        }
    }
}

/// Permanently remove an issue. Confirmation happens before this runs.
pub struct DeleteIssue {
    pub issue_id: Uuid,
}

impl Command for DeleteIssue {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        context.issues.retain(|i| i.id != self.issue_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete issue {}", self.issue_id)
    }
}
