//! Sprint-specific query functions.

use serde::Serialize;

use crate::filter::IssueQuery;
use crate::{Issue, IssueId, Sprint, SprintId};

/// All issues attached to a sprint.
pub fn sprint_issues(sprint_id: SprintId, issues: &[Issue]) -> Vec<&Issue> {
    issues
        .iter()
        .filter(|issue| issue.sprint_id == Some(sprint_id))
        .collect()
}

/// Split a sprint's issues into (unfinished, done) id lists.
pub fn partition_sprint_issues(sprint_id: SprintId, issues: &[Issue]) -> (Vec<IssueId>, Vec<IssueId>) {
    sprint_issues(sprint_id, issues)
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut open, mut done), issue| {
            if issue.status.is_done() {
                done.push(issue.id);
            } else {
                open.push(issue.id);
            }
            (open, done)
        })
}

pub fn calculate_points(issues: &[&Issue]) -> u32 {
    issues.iter().map(|issue| issue.story_points).sum()
}

/// One open sprint with its issues.
#[derive(Debug, Clone, Serialize)]
pub struct SprintPlan {
    pub sprint: Sprint,
    pub issue_count: usize,
    pub story_points: u32,
    pub issues: Vec<Issue>,
}

/// Every sprint that is not closed, followed by the filtered backlog.
#[derive(Debug, Clone, Serialize)]
pub struct PlanningView {
    pub sprints: Vec<SprintPlan>,
    pub backlog: Vec<Issue>,
}

impl PlanningView {
    pub fn build(issues: &[Issue], sprints: &[Sprint], query: &IssueQuery, current_user: &str) -> Self {
        let sprints = sprints
            .iter()
            .filter(|s| s.is_open())
            .map(|sprint| {
                let members = sprint_issues(sprint.id, issues);
                SprintPlan {
                    sprint: sprint.clone(),
                    issue_count: members.len(),
                    story_points: calculate_points(&members),
                    issues: members.into_iter().cloned().collect(),
                }
            })
            .collect();

        Self {
            sprints,
            backlog: super::backlog(issues, query, current_user)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
