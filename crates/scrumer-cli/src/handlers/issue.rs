use anyhow::{anyhow, bail};
use scrumer_domain::{
    query, FieldUpdate, Issue, IssueDraft, IssueQuery, IssueUpdate, Placement, PullRequest,
    ScrumOperations, TestCase, User,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::{IssueAction, IssueCreateArgs, IssueUpdateArgs};
use crate::context::Session;
use crate::handlers::ai::{require_ai_title, suggest};
use crate::handlers::backlog::query_with;
use crate::output;

#[derive(Serialize)]
struct IssueDetail {
    #[serde(flatten)]
    issue: Issue,
    assignee_user: Option<User>,
    linked_pull_requests: Vec<PullRequest>,
    linked_tests: Vec<TestCase>,
}

pub async fn handle(session: &mut Session, action: IssueAction) -> anyhow::Result<Value> {
    match action {
        IssueAction::Create(args) => {
            let issue = create(session, args).await?;
            output::item(issue)
        }
        IssueAction::List(args) => {
            let issue_query = query_with(&IssueQuery::new(), &args);
            let ws = &session.workspace;
            let issues: Vec<Issue> =
                query::filter_issues(&ws.issues, &issue_query, ws.current_user())
                    .into_iter()
                    .cloned()
                    .collect();
            output::list(issues)
        }
        IssueAction::Get { issue } => {
            let issue = session.resolve_issue(&issue)?;
            let ws = &session.workspace;
            let detail = IssueDetail {
                assignee_user: issue.assignee.as_deref().and_then(|id| ws.user(id)).cloned(),
                linked_pull_requests: ws.pull_requests_for(&issue).into_iter().cloned().collect(),
                linked_tests: ws.linked_test_cases(&issue.key)?,
                issue,
            };
            output::item(detail)
        }
        IssueAction::Update(args) => {
            let issue = session.resolve_issue(&args.issue)?;
            let updates = build_update(&args);
            let updated = session
                .workspace
                .update_issue(issue.id, updates)?
                .ok_or_else(|| anyhow!("Issue not found: {}", args.issue))?;
            output::item(updated)
        }
        IssueAction::Status { issue, status } => {
            let issue = session.resolve_issue(&issue)?;
            let updated = session
                .workspace
                .set_status(issue.id, status)?
                .ok_or_else(|| anyhow!("Issue not found: {}", issue.key))?;
            output::item(updated)
        }
        IssueAction::Delete { issue } => {
            let issue = session.resolve_issue(&issue)?;
            let decision = session
                .workspace
                .delete_issue(issue.id, session.prompter.as_mut())?;
            if decision.is_applied() {
                tracing::info!(key = %issue.key, "issue deleted");
            }
            Ok(json!({ "decision": decision, "key": issue.key, "id": issue.id }))
        }
        IssueAction::MoveSprint {
            issue,
            sprint,
            backlog,
        } => {
            let issue = session.resolve_issue(&issue)?;
            let sprint_id = match sprint {
                Some(ref reference) if !backlog => Some(session.resolve_sprint(reference)?.id),
                _ => None,
            };
            let moved = session
                .workspace
                .move_to_sprint(issue.id, sprint_id)?
                .ok_or_else(|| anyhow!("Issue not found: {}", issue.key))?;
            output::item(moved)
        }
    }
}

async fn create(session: &mut Session, args: IssueCreateArgs) -> anyhow::Result<Issue> {
    let mut draft = IssueDraft::new(args.title);
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority;
    }
    if let Some(points) = args.points {
        draft.story_points = points;
    }
    draft.assignee = args.assignee;
    if args.backlog {
        draft.placement = Placement::Backlog;
    }

    if args.ai {
        require_ai_title(session, &draft.title)?;
        let suggestion = suggest(session, &draft.title).await;
        draft.description = suggestion.description;
        draft.story_points = suggestion.points;
    }

    if !draft.has_title() {
        session.prompter.alert("Issue title is required");
        bail!("Issue title is required");
    }

    let issue = session.workspace.create_issue(draft)?;
    tracing::info!(key = %issue.key, "issue created");
    Ok(issue)
}

fn build_update(args: &IssueUpdateArgs) -> IssueUpdate {
    let assignee = if args.unassign {
        FieldUpdate::Clear
    } else {
        args.assignee.clone().into()
    };
    IssueUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
        status: args.status,
        priority: args.priority,
        assignee,
        story_points: args.points,
    }
}
