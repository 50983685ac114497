use serde::Serialize;

use crate::issue::Status;

/// A board column. There is exactly one per status, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: Status,
    pub title: &'static str,
}

pub const COLUMNS: [Column; 5] = [
    Column {
        status: Status::ToDo,
        title: "TO DO",
    },
    Column {
        status: Status::InProgress,
        title: "IN PROGRESS",
    },
    Column {
        status: Status::Review,
        title: "IN REVIEW",
    },
    Column {
        status: Status::Qa,
        title: "QA",
    },
    Column {
        status: Status::Done,
        title: "DONE",
    },
];

impl Column {
    pub fn for_status(status: Status) -> Column {
        COLUMNS[status.index()]
    }
}
