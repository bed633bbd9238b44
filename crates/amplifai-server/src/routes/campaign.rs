//! Campaign Routes

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::error::ApiError;
use crate::models::{CampaignLaunchRequest, CampaignLaunchResponse};
use crate::AppState;

/// Launch a marketing campaign
#[utoipa::path(
    post,
    path = "/launch-campaign",
    request_body = CampaignLaunchRequest,
    responses(
        (status = 200, description = "Campaign launched", body = CampaignLaunchResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Invalid campaign", body = ErrorResponse)
    ),
    tag = "Campaign"
)]
pub async fn launch_campaign(
    State(state): State<AppState>,
    payload: Result<Json<CampaignLaunchRequest>, JsonRejection>,
) -> Result<Json<CampaignLaunchResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::info!("🚀 Launching campaign: {}", req.campaign_id);

    let launch = state.ingest.launch_campaign(req.into()).await?;
    Ok(Json(launch.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/launch-campaign", post(launch_campaign))
}
