use scrumer_domain::{query, IssueQuery};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{BacklogAction, IssueListArgs};
use crate::context::Session;
use crate::output;

#[derive(Serialize)]
struct BacklogResponse<'a, T: Serialize> {
    query: &'a IssueQuery,
    items: Vec<T>,
    count: usize,
}

/// The shared query with one-off overrides from list flags layered on top.
pub fn query_with(base: &IssueQuery, args: &IssueListArgs) -> IssueQuery {
    let mut issue_query = base.clone();
    if let Some(ref search) = args.search {
        issue_query.set_search(search.clone());
    }
    if let Some(filter) = args.filter {
        if issue_query.quick_filter() != Some(filter) {
            issue_query.toggle(filter);
        }
    }
    issue_query
}

fn respond(session: &Session, issue_query: &IssueQuery) -> anyhow::Result<Value> {
    let ws = &session.workspace;
    let items = query::backlog(&ws.issues, issue_query, ws.current_user());
    output::item(BacklogResponse {
        query: issue_query,
        count: items.len(),
        items,
    })
}

pub fn handle(session: &mut Session, action: BacklogAction) -> anyhow::Result<Value> {
    match action {
        BacklogAction::List(args) => {
            let issue_query = query_with(&session.query, &args);
            respond(session, &issue_query)
        }
        BacklogAction::Search { text } => {
            session.query.set_search(text);
            respond(session, &session.query)
        }
        BacklogAction::Filter { filter } => {
            session.query.toggle(filter);
            respond(session, &session.query)
        }
        BacklogAction::Clear => {
            session.query.clear();
            respond(session, &session.query)
        }
    }
}
