//! Demo workspace the dashboard starts with.

use chrono::NaiveDate;
use scrumer_core::AppConfig;

use crate::{
    Issue, IssueDraft, Priority, Project, PullRequest, PullRequestStatus, Sprint, Status,
    TestCase, TestCategory, TestStatus, TestStep, TestTool, User, Workspace,
};

struct SeedIssue {
    title: &'static str,
    description: &'static str,
    status: Status,
    priority: Priority,
    assignee: Option<&'static str>,
    reporter: &'static str,
    points: u32,
    in_active_sprint: bool,
    pull_requests: &'static [&'static str],
}

struct SeedTest {
    title: &'static str,
    status: TestStatus,
    category: TestCategory,
    tool: TestTool,
    linked: &'static str,
    step: (&'static str, &'static str),
}

const ISSUES: [SeedIssue; 4] = [
    SeedIssue {
        title: "Initialize project structure",
        description: "Core project setup.",
        status: Status::Done,
        priority: Priority::Highest,
        assignee: Some("u1"),
        reporter: "u2",
        points: 3,
        in_active_sprint: true,
        pull_requests: &["pr2"],
    },
    SeedIssue {
        title: "Implement Kanban Board",
        description: "Drag and drop UI.",
        status: Status::InProgress,
        priority: Priority::High,
        assignee: Some("u2"),
        reporter: "u1",
        points: 5,
        in_active_sprint: true,
        pull_requests: &[],
    },
    SeedIssue {
        title: "Integrate Gemini AI",
        description: "AI capabilities.",
        status: Status::ToDo,
        priority: Priority::Medium,
        assignee: None,
        reporter: "u3",
        points: 8,
        in_active_sprint: true,
        pull_requests: &[],
    },
    SeedIssue {
        title: "Refactor Auth middleware",
        description: "Clean up logic.",
        status: Status::ToDo,
        priority: Priority::Low,
        assignee: None,
        reporter: "u1",
        points: 2,
        in_active_sprint: false,
        pull_requests: &[],
    },
];

const TESTS: [SeedTest; 5] = [
    SeedTest {
        title: "Verify AI summary accuracy",
        status: TestStatus::Pass,
        category: TestCategory::Ui,
        tool: TestTool::Playwright,
        linked: "SCRUM-3",
        step: ("Input 5 tasks", "Summary covers all 5"),
    },
    SeedTest {
        title: "API Response Payload Validation",
        status: TestStatus::Pass,
        category: TestCategory::Api,
        tool: TestTool::SuperTest,
        linked: "SCRUM-1",
        step: ("GET /issues", "Returns 200 OK"),
    },
    SeedTest {
        title: "Load test board concurrency",
        status: TestStatus::Blocked,
        category: TestCategory::Performance,
        tool: TestTool::K6,
        linked: "SCRUM-2",
        step: ("100 VUs", "Latency < 200ms"),
    },
    SeedTest {
        title: "SQL Injection on Search",
        status: TestStatus::Fail,
        category: TestCategory::Security,
        tool: TestTool::JMeter,
        linked: "SCRUM-4",
        step: ("Submit payload", "WAF blocks request"),
    },
    SeedTest {
        title: "Screen reader accessibility",
        status: TestStatus::Draft,
        category: TestCategory::Accessibility,
        tool: TestTool::Cypress,
        linked: "SCRUM-2",
        step: ("Scan page", "No critical violations"),
    },
];

fn users() -> Vec<User> {
    [
        ("u1", "Alex Rivers", "alex"),
        ("u2", "Sarah Chen", "sarah"),
        ("u3", "James Miller", "james"),
        ("u4", "Emma Wilson", "emma"),
    ]
    .into_iter()
    .map(|(id, name, seed)| User::new(id, name, format!("https://picsum.photos/seed/{}/100", seed)))
    .collect()
}

fn pull_requests() -> Vec<PullRequest> {
    vec![
        PullRequest {
            id: "pr1".to_string(),
            number: 124,
            title: "feat: add gemini streaming".to_string(),
            status: PullRequestStatus::Open,
            repo: "scrumer-core".to_string(),
            author: "u2".to_string(),
            updated: "2h ago".to_string(),
        },
        PullRequest {
            id: "pr2".to_string(),
            number: 121,
            title: "fix: sidebar layout issues".to_string(),
            status: PullRequestStatus::Merged,
            repo: "scrumer-ui".to_string(),
            author: "u1".to_string(),
            updated: "1d ago".to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Workspace {
    /// Workspace populated with the demo users, sprints, issues, tests and PRs.
    pub fn seeded(config: &AppConfig) -> Self {
        let mut project = Project::from_config("Scrumer Cloud", config);

        let mut genesis = Sprint::with_dates(
            "Genesis Cycle v1.0".to_string(),
            date(2025, 2, 15),
            date(2025, 3, 1),
            "Launch MVP architecture".to_string(),
        );
        genesis.activate();
        let optimization = Sprint::with_dates(
            "Optimization Wave".to_string(),
            date(2025, 3, 2),
            date(2025, 3, 16),
            "Performance & Scale".to_string(),
        );

        let issues = ISSUES
            .iter()
            .map(|seed| {
                let mut draft = IssueDraft::new(seed.title);
                draft.description = seed.description.to_string();
                draft.status = seed.status;
                draft.priority = seed.priority;
                draft.assignee = seed.assignee.map(str::to_string);
                draft.story_points = seed.points;
                let sprint_id = seed.in_active_sprint.then_some(genesis.id);
                let mut issue = Issue::new(&mut project, draft, seed.reporter.to_string(), sprint_id);
                issue.pull_requests = seed.pull_requests.iter().map(|id| id.to_string()).collect();
                issue
            })
            .collect();

        let test_cases = TESTS
            .iter()
            .map(|seed| {
                let mut case = TestCase::new(&mut project, seed.title.to_string(), seed.linked.to_string());
                case.status = seed.status;
                case.category = seed.category;
                case.tool = seed.tool;
                case.steps = vec![TestStep::new(seed.step.0, seed.step.1)];
                case
            })
            .collect();

        Self {
            project,
            users: users(),
            issues,
            sprints: vec![genesis, optimization],
            test_cases,
            pull_requests: pull_requests(),
        }
    }
}
