use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use crate::utils::StringExt;

use super::super::{SearchAdapter, SearchAdapterError, SearchResult};

/// Perplexica wraps its own SearXNG instance plus an LLM summarizer; the
/// result list still arrives as a flat array of page sources, which is all
/// this adapter needs.
pub struct PerplexicaAdapter {
    http: Client,
    settings: SearchAdapterSettings,
}

impl PerplexicaAdapter {
    pub fn new(settings: SearchAdapterSettings) -> Self {
        Self { http: Client::new(), settings }
    }
}

#[derive(Debug, Serialize)]
struct PerplexicaRequest<'a> {
    query: &'a str,
    #[serde(rename = "focusMode")]
    focus_mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct PerplexicaResponse {
    #[serde(default)]
    sources: Vec<PerplexicaSource>,
}

#[derive(Debug, Deserialize)]
struct PerplexicaSource {
    #[serde(rename = "pageContent", default)]
    page_content: String,
    metadata: PerplexicaMetadata,
}

#[derive(Debug, Deserialize)]
struct PerplexicaMetadata {
    title: String,
    url: String,
}

#[async_trait]
impl SearchAdapter for PerplexicaAdapter {
    fn engine(&self) -> SearchEngineType {
        SearchEngineType::Perplexica
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchAdapterError> {
        let engine = self.engine();

        let response = self
            .http
            .post(format!("{}/api/search", self.settings.base_url.trim_end_matches('/')))
            .json(&PerplexicaRequest { query, focus_mode: "webSearch" })
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchAdapterError::Timeout { engine, timeout_secs: self.settings.timeout_secs }
                } else {
                    SearchAdapterError::Transport { engine, source: e }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchAdapterError::HttpStatus { engine, status: status.as_u16(), body });
        }

        let parsed: PerplexicaResponse = response.json().await.map_err(|e| {
            SearchAdapterError::UnexpectedShape { engine, detail: e.to_string() }
        })?;

        Ok(parsed
            .sources
            .into_iter()
            .take(max_results as usize)
            .map(|s| SearchResult {
                url: s.metadata.url,
                title: s.metadata.title.trimmed(),
                description: s.page_content.trimmed(),
            })
            .collect())
    }

    async fn is_available(&self) -> bool {
        true
    }
}
