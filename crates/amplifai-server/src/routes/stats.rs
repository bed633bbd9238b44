//! Stats Routes - Read-only summaries of the record stores

use axum::{
    extract::rejection::QueryRejection,
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{
    LogStatsResponse, MemoryRecordResponse, MemoryStatsResponse, RecentMemoriesQuery,
};
use crate::AppState;

const DEFAULT_RECENT_LIMIT: usize = 10;

/// Log file statistics
#[utoipa::path(
    get,
    path = "/logs/stats",
    responses(
        (status = 200, description = "Log statistics", body = LogStatsResponse),
        (status = 500, description = "Log file could not be read", body = ErrorResponse)
    ),
    tag = "Stats"
)]
pub async fn log_stats(State(state): State<AppState>) -> Result<Json<LogStatsResponse>, ApiError> {
    let stats = state.stats.log_stats().await?;
    Ok(Json(LogStatsResponse::from_stats(
        stats,
        state.stats.log_location(),
    )))
}

/// Memory file statistics
#[utoipa::path(
    get,
    path = "/memory/stats",
    responses(
        (status = 200, description = "Memory statistics", body = MemoryStatsResponse),
        (status = 500, description = "Memory file could not be read", body = ErrorResponse)
    ),
    tag = "Stats"
)]
pub async fn memory_stats(
    State(state): State<AppState>,
) -> Result<Json<MemoryStatsResponse>, ApiError> {
    let stats = state.stats.memory_stats().await?;
    Ok(Json(MemoryStatsResponse::from_stats(
        stats,
        state.stats.memory_location(),
    )))
}

/// Most recent memory records, newest first
#[utoipa::path(
    get,
    path = "/memory/recent",
    params(RecentMemoriesQuery),
    responses(
        (status = 200, description = "Recent memories", body = Vec<MemoryRecordResponse>),
        (status = 500, description = "Memory file could not be read", body = ErrorResponse)
    ),
    tag = "Stats"
)]
pub async fn recent_memories(
    State(state): State<AppState>,
    query: Result<Query<RecentMemoriesQuery>, QueryRejection>,
) -> Result<Json<Vec<MemoryRecordResponse>>, ApiError> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let kind = query.kind.filter(|k| !k.trim().is_empty());
    let records = state.stats.recent_memories(kind, limit).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logs/stats", get(log_stats))
        .route("/memory/stats", get(memory_stats))
        .route("/memory/recent", get(recent_memories))
}
