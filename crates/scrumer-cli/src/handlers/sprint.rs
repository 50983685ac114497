use scrumer_domain::{PlanningView, ScrumOperations};
use serde_json::{json, Value};

use crate::cli::SprintAction;
use crate::context::Session;
use crate::output;

pub fn handle(session: &mut Session, action: SprintAction) -> anyhow::Result<Value> {
    match action {
        SprintAction::Create { name: Some(name) } => {
            let sprint = session.workspace.create_sprint(&name)?;
            output::item(sprint)
        }
        SprintAction::Create { name: None } => {
            match session
                .workspace
                .create_sprint_interactive(session.prompter.as_mut())?
            {
                Some(sprint) => output::item(sprint),
                None => Ok(json!({ "created": false })),
            }
        }
        SprintAction::List => output::list(session.workspace.list_sprints()?),
        SprintAction::Get { sprint } => output::item(session.resolve_sprint(&sprint)?),
        SprintAction::Start { sprint } => {
            let sprint = session.resolve_sprint(&sprint)?;
            output::item(session.workspace.start_sprint(sprint.id)?)
        }
        SprintAction::Complete { sprint } => {
            let sprint = session.resolve_sprint(&sprint)?;
            let decision = session
                .workspace
                .complete_sprint(sprint.id, session.prompter.as_mut())?;
            if decision.is_applied() {
                tracing::info!(sprint = %sprint.name, "sprint completed");
            }
            let sprint = session.resolve_sprint(&sprint.id.to_string())?;
            Ok(json!({ "decision": decision, "sprint": sprint }))
        }
        SprintAction::Plan => {
            let ws = &session.workspace;
            let plan = PlanningView::build(&ws.issues, &ws.sprints, &session.query, ws.current_user());
            output::item(plan)
        }
    }
}
