use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grantscout::config::{Command, Config};
use grantscout::taxonomy::{FundingSearchCategory, GeographicScope, SearchEngineType};
use grantscout::utils::{ScheduledExecutor, ScheduledTask};
use grantscout::workflow::ExecuteSearchRequest;
use grantscout::{AppState, models::SessionType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, cli_args) = Config::load()?;

    let log_filter = tracing_subscriber::EnvFilter::new(&config.logging.level);
    let registry = tracing_subscriber::registry().with(log_filter);

    if let Some(log_file) = &config.logging.file {
        let log_path = std::path::Path::new(log_file);
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let log_dir = log_path.parent().and_then(|p| p.to_str()).unwrap_or("logs");
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("grantscout.log");
        let file_prefix = file_name.strip_suffix(".log").unwrap_or(file_name);

        let file_appender = tracing_appender::rolling::daily(log_dir, file_prefix);
        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("GrantScout starting up");
    tracing::info!("Configuration loaded successfully");

    let state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    match cli_args.command.unwrap_or(Command::Run) {
        Command::Run => run_scheduler(state, &config).await,
        Command::Trigger { category, scope } => trigger_once(state, &category, scope.as_deref()).await?,
    }

    Ok(())
}

/// Optional periodic trigger. Core discovery is a synchronous call
/// (`SearchWorkflowOrchestrator::execute`); this loop is just a convenience
/// wrapper around it, not a requirement for using the pipeline.
async fn run_scheduler(state: AppState, config: &grantscout::config::Config) {
    let engines: Vec<SearchEngineType> = state.adapters.enabled_engines();

    if engines.is_empty() {
        tracing::warn!("no search adapters enabled; scheduler will produce empty sessions");
    }

    let task = Arc::new(DiscoveryTask {
        state: Arc::new(state),
        engines,
        max_queries_per_engine: config.workflow.max_queries_per_engine,
        max_results_per_query: config.workflow.max_results_per_query,
    });

    let interval = std::time::Duration::from_secs(config.workflow.total_timeout_secs);
    tracing::info!(interval_secs = interval.as_secs(), "starting scheduled discovery executor");
    let executor = ScheduledExecutor::new("funding-discovery", interval);
    executor.start(task).await;
}

struct DiscoveryTask {
    state: Arc<AppState>,
    engines: Vec<SearchEngineType>,
    max_queries_per_engine: usize,
    max_results_per_query: u32,
}

impl ScheduledTask for DiscoveryTask {
    fn run(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), anyhow::Error>> + Send + '_>> {
        Box::pin(async move {
            if self.engines.is_empty() {
                return Ok(());
            }
            for category in FundingSearchCategory::ALL {
                let request = ExecuteSearchRequest {
                    session_type: SessionType::Scheduled,
                    category: *category,
                    geographic_scope: None,
                    engines: self.engines.clone(),
                    max_queries_per_engine: self.max_queries_per_engine,
                    max_results_per_query: self.max_results_per_query,
                };
                let session = self.state.orchestrator.execute(request).await?;
                tracing::info!(
                    session_id = %session.session_id,
                    category = ?category,
                    status = ?session.status,
                    candidates = session.candidates_created,
                    "scheduled discovery session completed"
                );
            }
            Ok(())
        })
    }
}

async fn trigger_once(
    state: AppState,
    category: &str,
    scope: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(category)
        .ok_or_else(|| format!("unknown category: {category}"))?;
    let geographic_scope = scope.map(parse_scope).transpose()?.flatten();

    let engines: Vec<SearchEngineType> = state.adapters.enabled_engines();
    if engines.is_empty() {
        return Err("no search adapters are enabled in configuration".into());
    }

    let request = ExecuteSearchRequest {
        session_type: SessionType::Manual,
        category,
        geographic_scope,
        engines,
        max_queries_per_engine: 3,
        max_results_per_query: 10,
    };

    let session = state.orchestrator.execute(request).await?;
    tracing::info!(
        session_id = %session.session_id,
        status = ?session.status,
        queries_generated = session.queries_generated,
        results_fetched = session.results_fetched,
        candidates_created = session.candidates_created,
        candidates_skipped = session.candidates_skipped,
        "discovery session finished"
    );
    println!(
        "session {} finished with status {:?}: {} candidates created ({} skipped as low-confidence)",
        session.session_id, session.status, session.candidates_created, session.candidates_skipped
    );

    Ok(())
}

fn parse_category(raw: &str) -> Option<FundingSearchCategory> {
    let normalized = normalize(raw);
    FundingSearchCategory::ALL
        .iter()
        .find(|c| normalize(&format!("{c:?}")) == normalized)
        .copied()
}

fn parse_scope(raw: &str) -> Result<Option<GeographicScope>, Box<dyn std::error::Error>> {
    let normalized = normalize(raw);
    GeographicScope::ALL
        .iter()
        .find(|s| normalize(&format!("{s:?}")) == normalized)
        .copied()
        .map(Some)
        .ok_or_else(|| format!("unknown geographic scope: {raw}").into())
}

/// `"Eastern Europe"`, `"eastern-europe"`, `"EASTERN_EUROPE"` and
/// `EasternEurope`'s `Debug` form all normalize to `easterneurope`.
fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase()
}
