//! Status Routes

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::models::{format_uptime, ServiceInfo, StatusResponse};
use crate::AppState;

/// Service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "Health"
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config.service_name.clone(),
        status: "ok".to_string(),
        version: state.config.version.clone(),
        uptime: format_uptime(state.started_at.elapsed()),
        timestamp: Utc::now(),
        docs: "/swagger-ui".to_string(),
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    ),
    tag = "Health"
)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        uptime: format_uptime(state.started_at.elapsed()),
        version: state.config.version.clone(),
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/status", get(status))
}
