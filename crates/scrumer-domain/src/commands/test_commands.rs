use super::{Command, CommandContext};
use crate::TestStatus;
use scrumer_core::ScrumerResult;
use uuid::Uuid;

/// Create a draft test case; newest cases are listed first.
pub struct CreateTestCase {
    pub title: String,
    pub linked_issue_key: String,
}

impl Command for CreateTestCase {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        let case = crate::TestCase::new(
            context.project,
            self.title.clone(),
            self.linked_issue_key.clone(),
        );
        context.test_cases.insert(0, case);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create test case: '{}'", self.title)
    }
}

/// Advance a test case to the next status in its cycle.
pub struct CycleTestStatus {
    pub test_case_id: Uuid,
}

impl Command for CycleTestStatus {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(case) = context
            .test_cases
            .iter_mut()
            .find(|t| t.id == self.test_case_id)
        {
            case.cycle_status();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Cycle test case {} status", self.test_case_id)
    }
}

pub struct SetTestStatus {
    pub test_case_id: Uuid,
    pub status: TestStatus,
}

impl Command for SetTestStatus {
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()> {
        if let Some(case) = context
            .test_cases
            .iter_mut()
            .find(|t| t.id == self.test_case_id)
        {
            case.set_status(self.status);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set test case {} status to {:?}", self.test_case_id, self.status)
    }
}
