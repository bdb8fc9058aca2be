use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use crate::utils::StringExt;

use super::super::{SearchAdapter, SearchAdapterError, SearchResult};

/// SearXNG is self-hosted and typically unauthenticated; `api_key` is
/// optional and simply omitted from the request when absent.
pub struct SearxngAdapter {
    http: Client,
    settings: SearchAdapterSettings,
}

impl SearxngAdapter {
    pub fn new(settings: SearchAdapterSettings) -> Self {
        Self { http: Client::new(), settings }
    }
}

#[derive(Debug, Deserialize)]
struct SearxngResponse {
    #[serde(default)]
    results: Vec<SearxngResult>,
}

#[derive(Debug, Deserialize)]
struct SearxngResult {
    url: String,
    title: String,
    #[serde(default)]
    content: String,
}

#[async_trait]
impl SearchAdapter for SearxngAdapter {
    fn engine(&self) -> SearchEngineType {
        SearchEngineType::Searxng
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchAdapterError> {
        let engine = self.engine();

        let response = self
            .http
            .get(format!("{}/search", self.settings.base_url.trim_end_matches('/')))
            .query(&[("q", query), ("format", "json")])
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

        let parsed: SearxngResponse = response.json().await.map_err(|e| {
            SearchAdapterError::UnexpectedShape { engine, detail: e.to_string() }
        })?;

        Ok(parsed
            .results
            .into_iter()
            .take(max_results as usize)
            .map(|r| SearchResult { url: r.url, title: r.title.trimmed(), description: r.content.trimmed() })
            .collect())
    }

    async fn is_available(&self) -> bool {
        true
    }
}
