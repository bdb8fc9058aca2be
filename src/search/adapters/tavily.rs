use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use crate::utils::StringExt;

use super::super::{SearchAdapter, SearchAdapterError, SearchResult};

pub struct TavilyAdapter {
    http: Client,
    settings: SearchAdapterSettings,
}

impl TavilyAdapter {
    pub fn new(settings: SearchAdapterSettings) -> Self {
        Self { http: Client::new(), settings }
    }
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: String,
    title: String,
    #[serde(default)]
    content: String,
}

#[async_trait]
impl SearchAdapter for TavilyAdapter {
    fn engine(&self) -> SearchEngineType {
        SearchEngineType::Tavily
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchAdapterError> {
        let engine = self.engine();
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .ok_or(SearchAdapterError::NotConfigured { engine })?;

        let response = self
            .http
            .post(format!("{}/search", self.settings.base_url.trim_end_matches('/')))
            .json(&TavilyRequest { api_key, query, max_results })
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

        let parsed: TavilyResponse = response.json().await.map_err(|e| {
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
        self.settings.api_key.is_some()
    }
}
