//! HTTP backend for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use scrumer_core::{AssistConfig, ScrumerError, ScrumerResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{AssistBackend, GenerateRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate. Empty when the model
    /// returned nothing.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn request_body(request: &GenerateRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: vec![Content {
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
        generation_config: request
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
    }
}

pub struct GeminiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiBackend {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build a backend from configuration, reading the key from the
    /// environment.
    pub fn from_config(config: &AssistConfig) -> Self {
        Self::new(config.effective_base_url(), config.api_key())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl AssistBackend for GeminiBackend {
    async fn generate(&self, request: GenerateRequest) -> ScrumerResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ScrumerError::Assist("no API key configured".to_string()))?;

        tracing::debug!(model = %request.model, "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, api_key)
            .json(&request_body(&request))
            .send()
            .await
            .map_err(|e| ScrumerError::Assist(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrumerError::Assist(format!(
                "service responded with {}",
                status
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ScrumerError::Assist(format!("unreadable response: {}", e)))?;

        Ok(body.text())
    }
}
