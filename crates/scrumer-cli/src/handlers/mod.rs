pub mod ai;
pub mod backlog;
pub mod board;
pub mod issue;
pub mod pr;
pub mod sprint;
pub mod test_case;

use serde_json::Value;

use crate::cli::WorkspaceCommand;
use crate::context::Session;

/// Run one workspace command and return the `data` payload of its response.
pub async fn dispatch(session: &mut Session, command: WorkspaceCommand) -> anyhow::Result<Value> {
    match command {
        WorkspaceCommand::Board(cmd) => board::handle(session, cmd.action),
        WorkspaceCommand::Issue(cmd) => issue::handle(session, cmd.action).await,
        WorkspaceCommand::Backlog(cmd) => backlog::handle(session, cmd.action),
        WorkspaceCommand::Sprint(cmd) => sprint::handle(session, cmd.action),
        WorkspaceCommand::Test(cmd) => test_case::handle(session, cmd.action),
        WorkspaceCommand::Pr(cmd) => pr::handle(session, cmd.action),
        WorkspaceCommand::Ai(cmd) => ai::handle(session, cmd.action).await,
    }
}
