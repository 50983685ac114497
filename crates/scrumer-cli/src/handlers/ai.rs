use anyhow::bail;
use scrumer_assist::IssueSuggestion;
use scrumer_domain::ScrumOperations;
use serde_json::{json, Value};

use crate::cli::AiAction;
use crate::context::Session;
use crate::output;

pub const AI_TITLE_REQUIRED: &str = "A title is required for AI contextualization.";

/// Alert and refuse when there is no title to build a suggestion from.
pub fn require_ai_title(session: &mut Session, title: &str) -> anyhow::Result<()> {
    if title.trim().is_empty() {
        session.prompter.alert(AI_TITLE_REQUIRED);
        bail!(AI_TITLE_REQUIRED);
    }
    Ok(())
}

pub async fn suggest(session: &Session, title: &str) -> IssueSuggestion {
    session
        .suggestion
        .run(session.assist.generate_issue_description(title.trim()))
        .await
}

pub async fn handle(session: &mut Session, action: AiAction) -> anyhow::Result<Value> {
    match action {
        AiAction::Describe { title } => {
            require_ai_title(session, &title)?;
            output::item(suggest(session, &title).await)
        }
        AiAction::Summarize => {
            let issues = session.workspace.list_issues()?;
            let summary = session
                .summary
                .run(session.assist.summarize_project(&issues))
                .await;
            Ok(json!({ "summary": summary, "issue_count": issues.len() }))
        }
    }
}
