use super::{Command, CommandContext};
use crate::query::partition_sprint_issues;
use scrumer_core::ScrumerResult;
use uuid::Uuid;

/// Create a new planned sprint
pub struct CreateSprint {
    pub name: String,
    pub length_days: u32,
}

impl Command for CreateSprint {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        let sprint = crate::Sprint::new(self.name.clone(), self.length_days)?;
        context.sprints.push(sprint);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create sprint '{}'", self.name)
    }
}

/// Start a sprint (change status to Active)
pub struct StartSprint {
    pub sprint_id: Uuid,
}

impl Command for StartSprint {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(sprint) = context.sprints.iter_mut().find(|s| s.id == self.sprint_id) {
            sprint.activate();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Start sprint {}", self.sprint_id)
    }
}

/// Close a sprint and return its unfinished issues to the backlog.
///
/// Issues already Done stay attached to the closed sprint as a record of
/// what it delivered.
pub struct CompleteSprint {
    pub sprint_id: Uuid,
}

impl Command for CompleteSprint {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        let Some(sprint) = context.sprints.iter_mut().find(|s| s.id == self.sprint_id) else {
            return Ok(());
        };
        sprint.close();

        let (unfinished, _) = partition_sprint_issues(self.sprint_id, context.issues.as_slice());
        for issue in context.issues.iter_mut() {
            if unfinished.contains(&issue.id) {
                issue.move_to_sprint(None);
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Complete sprint {}", self.sprint_id)
    }
}
