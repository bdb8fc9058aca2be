//! Wire types for the OpenAI-compatible chat completions endpoint, and the
//! error taxonomy for the one operation this module exposes: `generate`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    pub content: Option<String>,
}

/// Every way the LLM client can fail. Callers treat every variant as
/// `LlmUnavailable` — query generation falls back to a deterministic
/// strategy rather than propagating the error — but the variants stay
/// distinct so logs can say why.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("LLM transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LLM API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("LLM returned an empty or unparseable response: {0}")]
    EmptyResponse(String),

    #[error("LLM client misconfigured: {0}")]
    Configuration(String),
}
