pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::{AppConfig, AssistConfig};
pub use error::ScrumerError;
pub use logging::{LogEntry, Loggable};
pub use result::ScrumerResult;
pub use traits::{Decision, Prompter, ScriptedPrompter};
