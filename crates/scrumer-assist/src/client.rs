use std::sync::Arc;

use scrumer_core::AppConfig;
use scrumer_domain::Issue;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::backend::{AssistBackend, GenerateRequest};
use crate::gemini::GeminiBackend;

pub const FALLBACK_DESCRIPTION: &str = "Failed to generate AI description. Please write manually.";
pub const FALLBACK_POINTS: u32 = 1;
pub const NO_SUMMARY: &str = "No summary available.";
pub const SUMMARY_ERROR: &str = "Error generating summary.";

/// Suggested description and story points for a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSuggestion {
    pub description: String,
    pub points: u32,
}

impl IssueSuggestion {
    pub fn fallback() -> Self {
        Self {
            description: FALLBACK_DESCRIPTION.to_string(),
            points: FALLBACK_POINTS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    description: String,
    points: f64,
}

impl RawSuggestion {
    fn into_suggestion(self) -> IssueSuggestion {
        let points = if self.points.is_finite() && self.points > 0.0 {
            self.points.round().min(f64::from(u32::MAX)) as u32
        } else {
            0
        };
        IssueSuggestion {
            description: self.description,
            points,
        }
    }
}

pub fn description_prompt(title: &str) -> String {
    format!(
        "Generate a professional Jira-style issue description for: \"{}\". \
         Include a summary, acceptance criteria, and a suggested story point \
         estimate (fibonacci: 1, 2, 3, 5, 8, 13).",
        title
    )
}

pub fn summary_prompt(issues: &[Issue]) -> String {
    let mut prompt = String::from(
        "Provide a high-level executive summary of this project progress based on these issues:\n",
    );
    let lines: Vec<String> = issues
        .iter()
        .map(|i| format!("- {} ({})", i.title, i.status))
        .collect();
    prompt.push_str(&lines.join("\n"));
    prompt
}

fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "points": { "type": "NUMBER" }
        },
        "required": ["description", "points"]
    })
}

/// Front door to the model. Every call yields a displayable value; failures
/// are logged and replaced with fixed fallbacks.
#[derive(Clone)]
pub struct AssistClient {
    backend: Arc<dyn AssistBackend>,
    description_model: String,
    summary_model: String,
}

impl AssistClient {
    pub fn new(
        backend: Arc<dyn AssistBackend>,
        description_model: impl Into<String>,
        summary_model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            description_model: description_model.into(),
            summary_model: summary_model.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let assist = &config.assist;
        let backend = GeminiBackend::from_config(assist);
        if !backend.has_api_key() {
            tracing::debug!("no assist API key set; suggestions will use fallbacks");
        }
        Self::new(
            Arc::new(backend),
            assist.effective_description_model(),
            assist.effective_summary_model(),
        )
    }

    pub async fn generate_issue_description(&self, title: &str) -> IssueSuggestion {
        let request = GenerateRequest::structured(
            self.description_model.clone(),
            description_prompt(title),
            suggestion_schema(),
        );

        let text = match self.backend.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "issue description generation failed");
                return IssueSuggestion::fallback();
            }
        };

        let body = if text.trim().is_empty() { "{}" } else { text.as_str() };
        match serde_json::from_str::<RawSuggestion>(body) {
            Ok(raw) => raw.into_suggestion(),
            Err(e) => {
                tracing::warn!(error = %e, "issue description response was not usable");
                IssueSuggestion::fallback()
            }
        }
    }

    pub async fn summarize_project(&self, issues: &[Issue]) -> String {
        let request = GenerateRequest::text(self.summary_model.clone(), summary_prompt(issues));

        match self.backend.generate(request).await {
            Ok(text) if text.is_empty() => NO_SUMMARY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "project summary generation failed");
                SUMMARY_ERROR.to_string()
            }
        }
    }
}
