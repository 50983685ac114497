use serde_json::Value;

use crate::cli::PrAction;
use crate::context::Session;
use crate::output;

pub fn handle(session: &mut Session, action: PrAction) -> anyhow::Result<Value> {
    match action {
        PrAction::List => output::list(session.workspace.pull_requests.clone()),
    }
}
