use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use crate::utils::StringExt;

use super::super::{SearchAdapter, SearchAdapterError, SearchResult};

pub struct BraveAdapter {
    http: Client,
    settings: SearchAdapterSettings,
}

impl BraveAdapter {
    pub fn new(settings: SearchAdapterSettings) -> Self {
        Self { http: Client::new(), settings }
    }
}

#[derive(Debug, Deserialize)]
struct BraveResponse {
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveResult>,
}

#[derive(Debug, Deserialize)]
struct BraveResult {
    url: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[async_trait]
impl SearchAdapter for BraveAdapter {
    fn engine(&self) -> SearchEngineType {
        SearchEngineType::Brave
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
            .get(format!("{}/res/v1/web/search", self.settings.base_url.trim_end_matches('/')))
            .header("X-Subscription-Token", api_key)
            .header("Accept", "application/json")
            .query(&[("q", query), ("count", &max_results.to_string())])
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

        let parsed: BraveResponse = response.json().await.map_err(|e| {
            SearchAdapterError::UnexpectedShape { engine, detail: e.to_string() }
        })?;

        Ok(parsed
            .web
            .map(|w| w.results)
            .unwrap_or_default()
            .into_iter()
            .take(max_results as usize)
            .map(|r| SearchResult { url: r.url, title: r.title.trimmed(), description: r.description.trimmed() })
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.settings.api_key.is_some()
    }
}
