use async_trait::async_trait;
use scrumer_core::ScrumerResult;
use serde_json::Value;

/// A single prompt sent to a text-generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// JSON schema the response must follow. `None` asks for plain text.
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn structured(model: impl Into<String>, prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// Transport to a generative-language service. Returns the raw model text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssistBackend: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> ScrumerResult<String>;
}
