use chrono::{DateTime, Utc};
use scrumer_core::ScrumerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::project::Project;

pub type TestCaseId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Draft,
    Pass,
    Fail,
    Blocked,
}

impl TestStatus {
    /// Order a repeated "cycle" action walks through.
    const CYCLE: [TestStatus; 4] = [
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Blocked,
        TestStatus::Draft,
    ];

    pub fn cycled(self) -> TestStatus {
        let idx = Self::CYCLE
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::CYCLE.len() - 1);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestCategory {
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "API")]
    Api,
    Performance,
    Security,
    Accessibility,
}

impl FromStr for TestCategory {
    type Err = ScrumerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ui" => Ok(TestCategory::Ui),
            "api" => Ok(TestCategory::Api),
            "performance" => Ok(TestCategory::Performance),
            "security" => Ok(TestCategory::Security),
            "accessibility" => Ok(TestCategory::Accessibility),
            _ => Err(ScrumerError::validation(format!(
                "Unknown test category '{}'. Expected one of: UI, API, Performance, Security, Accessibility",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestTool {
    Playwright,
    Cypress,
    Selenium,
    SuperTest,
    K6,
    JMeter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub step: String,
    pub expected: String,
}

impl TestStep {
    pub fn new(step: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            expected: expected.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub id: TestCaseId,
    pub key: String,
    pub title: String,
    pub status: TestStatus,
    pub category: TestCategory,
    pub tool: TestTool,
    /// Soft reference to an issue key; never validated.
    pub linked_issue_key: String,
    pub steps: Vec<TestStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestCase {
    /// New draft UI case with a single initialization step.
    pub fn new(project: &mut Project, title: String, linked_issue_key: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key: project.allocate_test_key(),
            title,
            status: TestStatus::Draft,
            category: TestCategory::Ui,
            tool: TestTool::Playwright,
            linked_issue_key,
            steps: vec![TestStep::new("Initialization", "System ready")],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn cycle_status(&mut self) {
        self.set_status(self.status.cycled());
    }

    pub fn set_status(&mut self, status: TestStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_linked_to(&self, issue_key: &str) -> bool {
        self.linked_issue_key.eq_ignore_ascii_case(issue_key)
    }
}
