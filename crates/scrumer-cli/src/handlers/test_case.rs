use scrumer_domain::ScrumOperations;
use serde_json::Value;

use crate::cli::TestAction;
use crate::context::Session;
use crate::output;

pub fn handle(session: &mut Session, action: TestAction) -> anyhow::Result<Value> {
    match action {
        TestAction::Create { title, issue } => {
            let case = session.workspace.create_test_case(&title, &issue)?;
            output::item(case)
        }
        TestAction::List { category } => output::list(session.workspace.list_test_cases(category)?),
        TestAction::Linked { issue } => output::list(session.workspace.linked_test_cases(&issue)?),
        TestAction::Cycle { test } => {
            let case = session.resolve_test_case(&test)?;
            output::item(session.workspace.cycle_test_status(case.id)?)
        }
        TestAction::Pass { test } => {
            let case = session.resolve_test_case(&test)?;
            output::item(session.workspace.mark_test_passed(case.id)?)
        }
    }
}
