use anyhow::anyhow;
use scrumer_domain::{BoardView, QuickStep, ScrumOperations};
use serde_json::Value;

use crate::cli::{BoardAction, StepDirection};
use crate::context::Session;
use crate::output;

pub fn handle(session: &mut Session, action: BoardAction) -> anyhow::Result<Value> {
    match action {
        BoardAction::Show => {
            let ws = &session.workspace;
            let board = BoardView::build(
                &ws.issues,
                &ws.sprints,
                &session.query,
                ws.current_user(),
                &session.drag,
            );
            output::item(board)
        }
        BoardAction::Drag { issue, to } => {
            let issue = session.resolve_issue(&issue)?;
            let payload = session.drag.drag_start(issue.id);
            session.drag.drag_over(to);
            let transition = session.drag.drop(to, Some(&payload));
            session.drag.drag_end();

            let transition = transition.ok_or_else(|| anyhow!("Nothing to drop"))?;
            let moved = session
                .workspace
                .apply_transition(transition)?
                .ok_or_else(|| anyhow!("Issue not found: {}", issue.key))?;
            tracing::debug!(key = %moved.key, status = %moved.status, "issue dropped");
            output::item(moved)
        }
        BoardAction::Step { issue, direction } => {
            let issue = session.resolve_issue(&issue)?;
            let step = match direction {
                StepDirection::Next => QuickStep::Next,
                StepDirection::Prev => QuickStep::Previous,
            };
            let transition = step.transition(&issue).ok_or_else(|| {
                anyhow!("{} is already in {} and cannot move further", issue.key, issue.status)
            })?;
            let moved = session
                .workspace
                .apply_transition(transition)?
                .ok_or_else(|| anyhow!("Issue not found: {}", issue.key))?;
            output::item(moved)
        }
    }
}
