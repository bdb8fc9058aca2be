use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use crate::utils::StringExt;

use super::super::{SearchAdapter, SearchAdapterError, SearchResult};

pub struct SerperAdapter {
    http: Client,
    settings: SearchAdapterSettings,
}

impl SerperAdapter {
    pub fn new(settings: SearchAdapterSettings) -> Self {
        Self { http: Client::new(), settings }
    }
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: u32,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperResult>,
}

#[derive(Debug, Deserialize)]
struct SerperResult {
    link: String,
    title: String,
    #[serde(default)]
    snippet: String,
}

#[async_trait]
impl SearchAdapter for SerperAdapter {
    fn engine(&self) -> SearchEngineType {
        SearchEngineType::Serper
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
            .header("X-API-KEY", api_key)
            .header("Content-Type", "application/json")
            .json(&SerperRequest { q: query, num: max_results })
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

        let parsed: SerperResponse = response.json().await.map_err(|e| {
            SearchAdapterError::UnexpectedShape { engine, detail: e.to_string() }
        })?;

        Ok(parsed
            .organic
            .into_iter()
            .take(max_results as usize)
            .map(|r| SearchResult { url: r.link, title: r.title.trimmed(), description: r.snippet.trimmed() })
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.settings.api_key.is_some()
    }
}
