//! Board view model and the drag/drop status transition protocol.
//!
//! The view only reads issues and produces `StatusTransition` intents. The
//! workspace is the one that applies them.

use serde::Serialize;
use uuid::Uuid;

use crate::column::COLUMNS;
use crate::filter::{IssueFilter, IssueQuery, SprintFilter};
use crate::{Issue, IssueId, Priority, Sprint, SprintId, Status, UserId};

/// Request to put an issue into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTransition {
    pub issue_id: IssueId,
    pub to: Status,
}

/// One-column moves offered on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickStep {
    Previous,
    Next,
}

impl QuickStep {
    /// Adjacent status in the chain, or `None` at either end.
    pub fn target(self, from: Status) -> Option<Status> {
        match self {
            QuickStep::Previous => from.previous(),
            QuickStep::Next => from.next(),
        }
    }

    pub fn transition(self, issue: &Issue) -> Option<StatusTransition> {
        self.target(issue.status).map(|to| StatusTransition {
            issue_id: issue.id,
            to,
        })
    }
}

/// Dropping onto a column asks for exactly that column, whatever the
/// distance or direction from the current status.
pub fn drop_on_column(issue_id: IssueId, column: Status) -> StatusTransition {
    StatusTransition {
        issue_id,
        to: column,
    }
}

/// Transient drag-and-drop state: which card is in transit and which
/// column is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DragState {
    in_transit: Option<IssueId>,
    hovered: Option<Status>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the card as in transit and return the payload carried by the drag.
    pub fn drag_start(&mut self, issue_id: IssueId) -> String {
        self.in_transit = Some(issue_id);
        issue_id.to_string()
    }

    pub fn drag_over(&mut self, column: Status) {
        self.hovered = Some(column);
    }

    pub fn drag_leave(&mut self) {
        self.hovered = None;
    }

    /// Finish a drop on `column`. The highlight is cleared whatever happens;
    /// a missing or unreadable payload yields no transition.
    pub fn drop(&mut self, column: Status, payload: Option<&str>) -> Option<StatusTransition> {
        self.hovered = None;
        let issue_id = payload.and_then(|p| Uuid::parse_str(p.trim()).ok())?;
        Some(drop_on_column(issue_id, column))
    }

    pub fn drag_end(&mut self) {
        self.in_transit = None;
        self.hovered = None;
    }

    pub fn in_transit(&self) -> Option<IssueId> {
        self.in_transit
    }

    pub fn hovered(&self) -> Option<Status> {
        self.hovered
    }

    pub fn is_idle(&self) -> bool {
        self.in_transit.is_none() && self.hovered.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardCard {
    pub id: IssueId,
    pub key: String,
    pub title: String,
    pub priority: Priority,
    pub story_points: u32,
    pub assignee: Option<UserId>,
    pub previous: Option<Status>,
    pub next: Option<Status>,
    pub in_transit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: Status,
    pub title: &'static str,
    pub count: usize,
    pub highlighted: bool,
    pub cards: Vec<BoardCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SprintHeader {
    pub id: SprintId,
    pub name: String,
    pub dates: String,
}

/// Issues of the active sprint grouped by status column.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    /// `None` while no sprint is active ("planning phase").
    pub sprint: Option<SprintHeader>,
    pub columns: Vec<BoardColumn>,
}

impl BoardView {
    pub fn build(
        issues: &[Issue],
        sprints: &[Sprint],
        query: &IssueQuery,
        current_user: &str,
        drag: &DragState,
    ) -> Self {
        let active = sprints.iter().find(|s| s.is_active());
        let sprint_filter = active.map(|s| SprintFilter::new(s.id));

        let visible: Vec<&Issue> = match sprint_filter {
            Some(ref filter) => issues
                .iter()
                .filter(|i| filter.matches(i) && query.matches(i, current_user))
                .collect(),
            None => Vec::new(),
        };

        let columns = COLUMNS
            .iter()
            .map(|column| {
                let cards: Vec<BoardCard> = visible
                    .iter()
                    .filter(|i| i.status == column.status)
                    .map(|i| BoardCard {
                        id: i.id,
                        key: i.key.clone(),
                        title: i.title.clone(),
                        priority: i.priority,
                        story_points: i.story_points,
                        assignee: i.assignee.clone(),
                        previous: QuickStep::Previous.target(i.status),
                        next: QuickStep::Next.target(i.status),
                        in_transit: drag.in_transit() == Some(i.id),
                    })
                    .collect();
                BoardColumn {
                    status: column.status,
                    title: column.title,
                    count: cards.len(),
                    highlighted: drag.hovered() == Some(column.status),
                    cards,
                }
            })
            .collect();

        Self {
            sprint: active.map(|s| SprintHeader {
                id: s.id,
                name: s.name.clone(),
                dates: s.date_range(),
            }),
            columns,
        }
    }

    pub fn column(&self, status: Status) -> &BoardColumn {
        &self.columns[status.index()]
    }

    pub fn is_planning_phase(&self) -> bool {
        self.sprint.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::QuickFilter;
    use crate::{IssueDraft, Project};
    use scrumer_core::AppConfig;

    fn issue_with(project: &mut Project, title: &str, status: Status, sprint: Option<SprintId>) -> Issue {
        let mut draft = IssueDraft::new(title);
        draft.status = status;
        Issue::new(project, draft, "u1".to_string(), sprint)
    }

    fn active_sprint() -> Sprint {
        let mut sprint = Sprint::new("Sprint 1".to_string(), 14).unwrap();
        sprint.activate();
        sprint
    }

    #[test]
    fn test_quick_step_availability() {
        assert_eq!(QuickStep::Previous.target(Status::ToDo), None);
        assert_eq!(QuickStep::Next.target(Status::ToDo), Some(Status::InProgress));
        assert_eq!(QuickStep::Next.target(Status::Done), None);
        assert_eq!(QuickStep::Previous.target(Status::Done), Some(Status::Qa));
    }

    #[test]
    fn test_quick_step_transition_moves_one_position() {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let issue = issue_with(&mut project, "Task", Status::Review, None);

        let next = QuickStep::Next.transition(&issue).unwrap();
        assert_eq!(next.to, Status::Qa);
        let prev = QuickStep::Previous.transition(&issue).unwrap();
        assert_eq!(prev.to, Status::InProgress);
    }

    #[test]
    fn test_drop_skips_and_reverses_freely() {
        let id = Uuid::new_v4();
        assert_eq!(drop_on_column(id, Status::Done).to, Status::Done);
        assert_eq!(drop_on_column(id, Status::ToDo).to, Status::ToDo);
    }

    #[test]
    fn test_drag_protocol_happy_path() {
        let id = Uuid::new_v4();
        let mut drag = DragState::new();

        let payload = drag.drag_start(id);
        assert_eq!(drag.in_transit(), Some(id));

        drag.drag_over(Status::Qa);
        assert_eq!(drag.hovered(), Some(Status::Qa));

        let transition = drag.drop(Status::Qa, Some(&payload)).unwrap();
        assert_eq!(transition, StatusTransition { issue_id: id, to: Status::Qa });
        assert_eq!(drag.hovered(), None);

        drag.drag_end();
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_without_payload_is_noop_but_resets_highlight() {
        let mut drag = DragState::new();
        drag.drag_over(Status::Done);

        assert_eq!(drag.drop(Status::Done, None), None);
        assert_eq!(drag.hovered(), None);

        drag.drag_over(Status::Done);
        assert_eq!(drag.drop(Status::Done, Some("not-an-issue")), None);
        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let mut drag = DragState::new();
        drag.drag_over(Status::Review);
        drag.drag_leave();
        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn test_board_shows_only_active_sprint() {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let sprint = active_sprint();
        let issues = vec![
            issue_with(&mut project, "In sprint", Status::InProgress, Some(sprint.id)),
            issue_with(&mut project, "Backlog", Status::ToDo, None),
            issue_with(&mut project, "Done", Status::Done, Some(sprint.id)),
        ];

        let board = BoardView::build(
            &issues,
            &[sprint.clone()],
            &IssueQuery::new(),
            "u1",
            &DragState::new(),
        );

        assert!(!board.is_planning_phase());
        assert_eq!(board.sprint.as_ref().unwrap().id, sprint.id);
        assert_eq!(board.column(Status::InProgress).count, 1);
        assert_eq!(board.column(Status::Done).count, 1);
        assert_eq!(board.column(Status::ToDo).count, 0);
        assert_eq!(board.columns.len(), 5);
    }

    #[test]
    fn test_board_card_affordances() {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let sprint = active_sprint();
        let issues = vec![
            issue_with(&mut project, "First", Status::ToDo, Some(sprint.id)),
            issue_with(&mut project, "Last", Status::Done, Some(sprint.id)),
        ];

        let board = BoardView::build(&issues, &[sprint], &IssueQuery::new(), "u1", &DragState::new());

        let first = &board.column(Status::ToDo).cards[0];
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(Status::InProgress));

        let last = &board.column(Status::Done).cards[0];
        assert_eq!(last.previous, Some(Status::Qa));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_board_planning_phase_without_active_sprint() {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let planned = Sprint::new("Later".to_string(), 14).unwrap();
        let issues = vec![issue_with(&mut project, "Task", Status::ToDo, Some(planned.id))];

        let board = BoardView::build(&issues, &[planned], &IssueQuery::new(), "u1", &DragState::new());
        assert!(board.is_planning_phase());
        assert!(board.columns.iter().all(|c| c.cards.is_empty()));
    }

    #[test]
    fn test_board_applies_query_and_drag_state() {
        let mut project = Project::from_config("Test", &AppConfig::default());
        let sprint = active_sprint();
        let mut mine = IssueDraft::new("Mine");
        mine.assignee = Some("u1".to_string());
        let mine = Issue::new(&mut project, mine, "u1".to_string(), Some(sprint.id));
        let other = issue_with(&mut project, "Other", Status::ToDo, Some(sprint.id));

        let mut query = IssueQuery::new();
        query.toggle(QuickFilter::Mine);
        let mut drag = DragState::new();
        drag.drag_start(mine.id);
        drag.drag_over(Status::Review);

        let board = BoardView::build(&[mine.clone(), other], &[sprint], &query, "u1", &drag);

        let todo = board.column(Status::ToDo);
        assert_eq!(todo.count, 1);
        assert_eq!(todo.cards[0].id, mine.id);
        assert!(todo.cards[0].in_transit);
        assert!(board.column(Status::Review).highlighted);
        assert!(!todo.highlighted);
    }
}
