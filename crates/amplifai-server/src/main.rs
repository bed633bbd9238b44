use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{HttpWebhook, JsonlStore};
use amplifai::{LogRecord, MemoryRecord, Notifier};
use application::{IngestService, NotificationDispatcher, StatsService};
use config::AppConfig;

/// Type aliases for application services with concrete store implementations
pub type AppIngestService = IngestService<JsonlStore<LogRecord>, JsonlStore<MemoryRecord>>;
pub type AppStatsService = StatsService<JsonlStore<LogRecord>, JsonlStore<MemoryRecord>>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ingest: Arc<AppIngestService>,
    pub stats: Arc<AppStatsService>,
    pub notifications: NotificationDispatcher,
    pub started_at: Instant,
}

impl AppState {
    /// Wire stores and services from configuration
    pub fn new(config: AppConfig, notifier: Option<Arc<dyn Notifier>>) -> Self {
        let logs = Arc::new(JsonlStore::<LogRecord>::new(config.log_file.clone()));
        let memory = Arc::new(JsonlStore::<MemoryRecord>::new(config.memory_file.clone()));
        let notifications = NotificationDispatcher::new(notifier, config.webhook_timeout);

        Self {
            ingest: Arc::new(IngestService::new(
                logs.clone(),
                memory.clone(),
                notifications.clone(),
            )),
            stats: Arc::new(StatsService::new(logs, memory)),
            notifications,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_notifier(config: &AppConfig) -> Option<Arc<dyn Notifier>> {
    let Some(url) = config.webhook_url.as_deref() else {
        tracing::info!("🔕 Webhook URL not set, notifications disabled");
        return None;
    };

    match HttpWebhook::new(url, config.webhook_timeout) {
        Ok(webhook) => {
            let webhook = webhook.with_format(config.webhook_format.clone());
            tracing::info!("🔔 Notifications enabled: {}", webhook.destination());
            Some(Arc::new(webhook))
        }
        Err(e) => {
            tracing::warn!("⚠️  Notifications disabled: {}", e);
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️  Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    tracing::info!("🚀 Starting {} v{}", config.service_name, config.version);
    tracing::info!("📝 Log file: {}", config.log_file.display());
    tracing::info!("🧠 Memory file: {}", config.memory_file.display());

    let addr = config.bind_addr()?;
    let notifier = build_notifier(&config);
    let state = AppState::new(config, notifier);
    let router = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
