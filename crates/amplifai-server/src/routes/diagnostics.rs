//! Diagnostics Routes
//!
//! - GET /debug/config - effective configuration, secrets masked
//! - GET /test/webhook - send one test notification and wait for the result

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use amplifai::Notification;

use crate::models::{ConfigDiagnostics, WebhookTestResponse};
use crate::AppState;

/// Effective configuration
#[utoipa::path(
    get,
    path = "/debug/config",
    responses(
        (status = 200, description = "Configuration diagnostics", body = ConfigDiagnostics)
    ),
    tag = "Diagnostics"
)]
pub async fn debug_config(State(state): State<AppState>) -> Json<ConfigDiagnostics> {
    let config = &state.config;
    Json(ConfigDiagnostics {
        service: config.service_name.clone(),
        version: config.version.clone(),
        log_level: config.log_level.clone(),
        log_file_path: state.stats.log_location(),
        memory_file_path: state.stats.memory_location(),
        webhook_configured: state.notifications.is_configured(),
        webhook_destination: state.notifications.destination(),
        webhook_timeout_secs: config.webhook_timeout.as_secs(),
    })
}

/// Webhook connectivity test
#[utoipa::path(
    get,
    path = "/test/webhook",
    responses(
        (status = 200, description = "Test outcome", body = WebhookTestResponse)
    ),
    tag = "Diagnostics"
)]
pub async fn test_webhook(State(state): State<AppState>) -> Json<WebhookTestResponse> {
    if !state.notifications.is_configured() {
        return Json(WebhookTestResponse {
            configured: false,
            test_passed: false,
            message: "Webhook URL not configured".to_string(),
            timestamp: Utc::now(),
        });
    }

    let notification = Notification::test(&state.config.service_name);
    let (test_passed, message) = match state.notifications.deliver_now(&notification).await {
        Ok(()) => (true, "Test message sent successfully".to_string()),
        Err(e) => {
            tracing::warn!("⚠️  Webhook test failed: {}", e);
            (false, format!("Failed to send test message: {e}"))
        }
    };

    Json(WebhookTestResponse {
        configured: true,
        test_passed,
        message,
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/debug/config", get(debug_config))
        .route("/test/webhook", get(test_webhook))
}
