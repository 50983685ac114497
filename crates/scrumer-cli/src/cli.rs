use clap::{Args, Parser, Subcommand};
use scrumer_domain::{Priority, QuickFilter, Status, TestCategory};

#[derive(Parser)]
#[command(name = "scrumer")]
#[command(about = "A scrum board, backlog planner and test tracker", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a config file (or set SCRUMER_CONFIG env var)
    #[arg(long, value_name = "PATH", env = "SCRUMER_CONFIG", global = true)]
    pub config: Option<String>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Without a command, start the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Workspace(WorkspaceCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Commands that act on the workspace. Shared by one-shot runs and the shell.
#[derive(Subcommand)]
pub enum WorkspaceCommand {
    /// Active sprint board
    Board(BoardCommand),
    /// Issue operations
    Issue(IssueCommand),
    /// Backlog and shared search/filter state
    Backlog(BacklogCommand),
    /// Sprint operations
    Sprint(SprintCommand),
    /// Test case operations
    Test(TestCommand),
    /// Pull requests
    Pr(PrCommand),
    /// AI assistance
    Ai(AiCommand),
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Show the active sprint grouped by column
    Show,
    /// Drag an issue onto a column
    Drag {
        /// Issue key or id
        issue: String,
        /// Target column (todo, in-progress, review, qa, done)
        #[arg(long)]
        to: Status,
    },
    /// Move an issue one column forward or back
    Step {
        /// Issue key or id
        issue: String,
        #[arg(value_enum)]
        direction: StepDirection,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum StepDirection {
    Next,
    #[value(alias = "previous")]
    Prev,
}

// Issue commands
#[derive(Args)]
pub struct IssueCommand {
    #[command(subcommand)]
    pub action: IssueAction,
}

#[derive(Subcommand)]
pub enum IssueAction {
    /// Create a new issue
    Create(IssueCreateArgs),
    /// List issues
    List(IssueListArgs),
    /// Get an issue with its linked tests and pull requests
    Get {
        /// Issue key or id
        issue: String,
    },
    /// Update an issue
    Update(IssueUpdateArgs),
    /// Set an issue's status directly
    Status {
        /// Issue key or id
        issue: String,
        status: Status,
    },
    /// Delete an issue (asks for confirmation)
    Delete {
        /// Issue key or id
        issue: String,
    },
    /// Move an issue to a sprint or back to the backlog
    MoveSprint {
        /// Issue key or id
        issue: String,
        /// Sprint id, name, or "active"
        #[arg(long, conflicts_with = "backlog", required_unless_present = "backlog")]
        sprint: Option<String>,
        #[arg(long)]
        backlog: bool,
    },
}

#[derive(Args)]
pub struct IssueCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub assignee: Option<String>,
    #[arg(long)]
    pub points: Option<u32>,
    /// Put the issue in the backlog instead of the active sprint
    #[arg(long)]
    pub backlog: bool,
    /// Draft description and story points with AI
    #[arg(long)]
    pub ai: bool,
}

#[derive(Args)]
pub struct IssueListArgs {
    /// Case-insensitive match on title or key
    #[arg(long)]
    pub search: Option<String>,
    /// Quick filter (mine, high-priority)
    #[arg(long)]
    pub filter: Option<QuickFilter>,
}

#[derive(Args)]
pub struct IssueUpdateArgs {
    /// Issue key or id
    pub issue: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long, conflicts_with = "unassign")]
    pub assignee: Option<String>,
    #[arg(long)]
    pub unassign: bool,
    #[arg(long)]
    pub points: Option<u32>,
}

// Backlog commands
#[derive(Args)]
pub struct BacklogCommand {
    #[command(subcommand)]
    pub action: BacklogAction,
}

#[derive(Subcommand)]
pub enum BacklogAction {
    /// List unscheduled issues
    List(IssueListArgs),
    /// Set the shared search text (empty clears it)
    Search {
        #[arg(default_value = "")]
        text: String,
    },
    /// Toggle a quick filter
    Filter { filter: QuickFilter },
    /// Clear search and quick filter
    Clear,
}

// Sprint commands
#[derive(Args)]
pub struct SprintCommand {
    #[command(subcommand)]
    pub action: SprintAction,
}

#[derive(Subcommand)]
pub enum SprintAction {
    /// Create a sprint (prompts for a name when --name is missing)
    Create {
        #[arg(long)]
        name: Option<String>,
    },
    /// List sprints
    List,
    /// Get a sprint
    Get {
        /// Sprint id, name, or "active"
        sprint: String,
    },
    /// Start a planned sprint
    Start {
        /// Sprint id, name, or "active"
        sprint: String,
    },
    /// Complete a sprint (asks for confirmation)
    Complete {
        /// Sprint id, name, or "active"
        sprint: String,
    },
    /// Show open sprints with their issues, followed by the backlog
    Plan,
}

// Test commands
#[derive(Args)]
pub struct TestCommand {
    #[command(subcommand)]
    pub action: TestAction,
}

#[derive(Subcommand)]
pub enum TestAction {
    /// Create a test case linked to an issue
    Create {
        #[arg(long)]
        title: String,
        /// Linked issue key
        #[arg(long)]
        issue: String,
    },
    /// List test cases
    List {
        #[arg(long)]
        category: Option<TestCategory>,
    },
    /// Test cases linked to an issue
    Linked {
        /// Issue key
        issue: String,
    },
    /// Advance a test case to its next status
    Cycle {
        /// Test key or id
        test: String,
    },
    /// Mark a test case as passed
    Pass {
        /// Test key or id
        test: String,
    },
}

// Pull request commands
#[derive(Args)]
pub struct PrCommand {
    #[command(subcommand)]
    pub action: PrAction,
}

#[derive(Subcommand)]
pub enum PrAction {
    /// List pull requests
    List,
}

// AI commands
#[derive(Args)]
pub struct AiCommand {
    #[command(subcommand)]
    pub action: AiAction,
}

#[derive(Subcommand)]
pub enum AiAction {
    /// Suggest a description and story points for a title
    Describe {
        #[arg(long)]
        title: String,
    },
    /// Summarize project progress
    Summarize,
}

/// One line typed into the interactive shell.
#[derive(Parser)]
#[command(name = "scrumer", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Workspace(WorkspaceCommand),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}
