//! Configuration layer: file → env vars → CLI args, highest priority last.

use clap::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::taxonomy::SearchEngineType;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub adapters: AdaptersConfig,
    pub query_cache: QueryCacheConfig,
    pub blacklist_cache: BlacklistCacheConfig,
    pub processor: ProcessorConfig,
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "sqlite://data/grantscout.db".to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,grantscout=debug".to_string(), file: Some("logs/grantscout.log".to_string()) }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub enabled: bool,
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
            max_tokens: 200,
            temperature: 0.7,
        }
    }
}

impl LlmConfig {
    pub fn to_client_config(&self) -> crate::llm::LlmClientConfig {
        crate::llm::LlmClientConfig {
            api_base: self.api_base.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAdapterSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_adapter_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_adapter_timeout_secs() -> u64 {
    12
}

impl Default for SearchAdapterSettings {
    fn default() -> Self {
        Self { enabled: false, base_url: String::new(), api_key: None, timeout_secs: default_adapter_timeout_secs() }
    }
}

/// A keyed map the config file expresses as a `[adapters.brave]`,
/// `[adapters.serper]`, ... table, converted into a lookup by
/// [`SearchEngineType`] for [`crate::search::AdapterRegistry`].
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AdaptersConfig {
    pub brave: SearchAdapterSettings,
    pub serper: SearchAdapterSettings,
    pub searxng: SearchAdapterSettings,
    pub tavily: SearchAdapterSettings,
    pub perplexica: SearchAdapterSettings,
}

impl AdaptersConfig {
    pub fn as_map(&self) -> HashMap<SearchEngineType, SearchAdapterSettings> {
        HashMap::from([
            (SearchEngineType::Brave, self.brave.clone()),
            (SearchEngineType::Serper, self.serper.clone()),
            (SearchEngineType::Searxng, self.searxng.clone()),
            (SearchEngineType::Tavily, self.tavily.clone()),
            (SearchEngineType::Perplexica, self.perplexica.clone()),
        ])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryCacheConfig {
    pub max_size: u64,
    pub ttl_secs: u64,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self { max_size: 1000, ttl_secs: 24 * 3600 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlacklistCacheConfig {
    pub ttl_secs: u64,
    pub max_size: u64,
}

impl Default for BlacklistCacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 24 * 3600, max_size: 10_000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub confidence_threshold: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self { confidence_threshold: "0.60".to_string() }
    }
}

impl ProcessorConfig {
    pub fn confidence_threshold_decimal(&self) -> rust_decimal::Decimal {
        self.confidence_threshold
            .parse()
            .unwrap_or(crate::processor::DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub max_queries_per_engine: usize,
    pub total_timeout_secs: u64,
    pub max_results_per_query: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self { max_queries_per_engine: 3, total_timeout_secs: 10 * 60, max_results_per_query: 10 }
    }
}

/// Command line overrides, highest precedence.
#[derive(Parser, Debug, Clone)]
#[command(name = "grantscoutd")]
#[command(version, about = "GrantScout - funding discovery pipeline")]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Database URL (overrides config file)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Logging level (overrides config file, e.g. "info,grantscout=debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// LLM API key (overrides config file)
    #[arg(long, value_name = "KEY")]
    pub llm_api_key: Option<String>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the optional scheduler, triggering discovery sessions on an interval.
    Run,
    /// Trigger a single discovery session and exit.
    Trigger {
        #[arg(long, value_name = "CATEGORY")]
        category: String,
        #[arg(long, value_name = "SCOPE")]
        scope: Option<String>,
    },
}

impl Config {
    /// Loading order (priority from highest to lowest):
    /// 1. Command line arguments
    /// 2. Environment variables (prefixed with `GRANTSCOUT_`)
    /// 3. Configuration file (config.toml)
    /// 4. Default values
    pub fn load() -> Result<(Self, CommandLineArgs), anyhow::Error> {
        let cli_args = CommandLineArgs::parse();

        let config_path = cli_args.config.clone().or_else(Self::find_config_file);
        let mut config = if let Some(config_path) = config_path {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.apply_cli_overrides(&cli_args);
        config.validate()?;

        Ok((config, cli_args))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = std::env::var("GRANTSCOUT_DATABASE_URL") {
            self.database.url = db_url;
            tracing::info!("Override database.url from env");
        }
        if let Ok(level) = std::env::var("GRANTSCOUT_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }
        if let Ok(api_key) = std::env::var("GRANTSCOUT_LLM_API_KEY") {
            self.llm.api_key = api_key;
            tracing::info!("Override llm.api_key from env");
        }
        if let Ok(base) = std::env::var("GRANTSCOUT_LLM_API_BASE") {
            self.llm.api_base = base;
            tracing::info!("Override llm.api_base from env: {}", self.llm.api_base);
        }
        if let Ok(brave_key) = std::env::var("GRANTSCOUT_BRAVE_API_KEY") {
            self.adapters.brave.api_key = Some(brave_key);
            self.adapters.brave.enabled = true;
        }
        if let Ok(serper_key) = std::env::var("GRANTSCOUT_SERPER_API_KEY") {
            self.adapters.serper.api_key = Some(serper_key);
            self.adapters.serper.enabled = true;
        }
        if let Ok(tavily_key) = std::env::var("GRANTSCOUT_TAVILY_API_KEY") {
            self.adapters.tavily.api_key = Some(tavily_key);
            self.adapters.tavily.enabled = true;
        }
    }

    fn apply_cli_overrides(&mut self, args: &CommandLineArgs) {
        if let Some(db_url) = &args.database_url {
            self.database.url = db_url.clone();
            tracing::info!("Override database.url from CLI");
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
            tracing::info!("Override logging.level from CLI: {}", self.logging.level);
        }
        if let Some(api_key) = &args.llm_api_key {
            self.llm.api_key = api_key.clone();
            tracing::info!("Override llm.api_key from CLI");
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.database.url.is_empty() {
            anyhow::bail!("database.url cannot be empty");
        }
        if self.query_cache.max_size == 0 {
            anyhow::bail!("query_cache.max_size must be > 0");
        }
        if self.workflow.max_queries_per_engine == 0 {
            anyhow::bail!("workflow.max_queries_per_engine must be > 0");
        }
        if self.processor.confidence_threshold_decimal() < rust_decimal::Decimal::ZERO
            || self.processor.confidence_threshold_decimal() > rust_decimal::Decimal::ONE
        {
            anyhow::bail!("processor.confidence_threshold must be within [0, 1]");
        }
        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths = ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];
        possible_paths.iter().find(|p| Path::new(p).exists()).map(|p| p.to_string())
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
