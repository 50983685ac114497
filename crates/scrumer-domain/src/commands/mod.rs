use scrumer_core::ScrumerResult;

pub mod issue_commands;
pub mod sprint_commands;
pub mod test_commands;

pub use issue_commands::*;
pub use sprint_commands::*;
pub use test_commands::*;

/// Trait for domain commands that mutate state.
///
/// Commands carry already-validated intent. Targets that no longer exist are
/// skipped silently; callers that care look the entity up afterwards.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> ScrumerResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Mutable view of every aggregate a command may touch.
pub struct CommandContext<'a> {
    pub project: &'a mut crate::Project,
    pub issues: &'a mut Vec<crate::Issue>,
    pub sprints: &'a mut Vec<crate::Sprint>,
    pub test_cases: &'a mut Vec<crate::TestCase>,
}
