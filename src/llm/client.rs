//! HTTP client for OpenAI-compatible chat completion endpoints.

use std::time::Duration;

use reqwest::Client;

use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, LlmError};

/// Settings the config layer supplies at construction time. There is
/// deliberately no persisted "provider" table here — this module talks to
/// exactly one configured endpoint per process.
#[derive(Debug, Clone)]
pub struct LlmClientConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for LlmClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(60),
            max_tokens: 200,
            temperature: 0.7,
        }
    }
}

/// Single-purpose LLM client: one operation, `generate`, over an
/// OpenAI-compatible `/chat/completions` endpoint. Forces HTTP/1.1 since
/// several self-hosted-compatible gateways in the field mishandle H2.
pub struct LlmClient {
    http: Client,
    config: LlmClientConfig,
}

impl LlmClient {
    pub fn new(config: LlmClientConfig) -> Result<Self, LlmError> {
        let http = Client::builder()
            .http1_only()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// Generate a completion for `prompt`. Every failure mode — timeout,
    /// transport error, non-2xx status, empty/unparseable body — is reported
    /// through [`LlmError`]; callers treat all of them as `LlmUnavailable`.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage { role: "user".to_string(), content: prompt.to_string() }],
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
        };

        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() { LlmError::Timeout(self.config.timeout) } else { LlmError::Transport(e) }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status: status.as_u16(), body });
        }

        let parsed: ChatCompletionResponse =
            response.json().await.map_err(|e| LlmError::EmptyResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| LlmError::EmptyResponse("no choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_config() {
        let client = LlmClient::new(LlmClientConfig::default());
        assert!(client.is_ok());
    }
}
