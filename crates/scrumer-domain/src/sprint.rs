use chrono::{DateTime, Duration, NaiveDate, Utc};
use scrumer_core::{ScrumerError, ScrumerResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SprintId = Uuid;

pub const DEFAULT_SPRINT_GOAL: &str = "New sprint objectives";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprintStatus {
    Planned,
    Active,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    pub status: SprintStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goal: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    /// A planned sprint starting today and lasting `length_days`. Fails when
    /// the end date would fall outside the calendar range.
    pub fn new(name: String, length_days: u32) -> ScrumerResult<Self> {
        let start = Utc::now().date_naive();
        let end = start
            .checked_add_signed(Duration::days(i64::from(length_days)))
            .ok_or_else(|| {
                ScrumerError::validation(format!(
                    "Sprint length of {} days is out of range",
                    length_days
                ))
            })?;
        Ok(Self::with_dates(name, start, end, DEFAULT_SPRINT_GOAL.to_string()))
    }

    pub fn with_dates(name: String, start_date: NaiveDate, end_date: NaiveDate, goal: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            status: SprintStatus::Planned,
            start_date,
            end_date,
            goal,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn activate(&mut self) {
        self.status = SprintStatus::Active;
        self.updated_at = Utc::now();
    }

    pub fn close(&mut self) {
        self.status = SprintStatus::Closed;
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status == SprintStatus::Active
    }

    pub fn is_open(&self) -> bool {
        self.status != SprintStatus::Closed
    }

    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}
