//! AI assistance for the dashboard.
//!
//! `AssistClient` turns model output into issue suggestions and project
//! summaries. It never fails: every backend error degrades to a fixed
//! fallback value so callers only ever see something displayable.

pub mod backend;
pub mod client;
pub mod gemini;
pub mod loading;

pub use backend::{AssistBackend, GenerateRequest};
pub use client::{
    AssistClient, IssueSuggestion, FALLBACK_DESCRIPTION, FALLBACK_POINTS, NO_SUMMARY,
    SUMMARY_ERROR,
};
pub use gemini::GeminiBackend;
pub use loading::{InsightSlot, LoadingFlag, LoadingGuard};
