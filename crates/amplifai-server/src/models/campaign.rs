//! Campaign DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use amplifai::CampaignRequest;

use crate::application::CampaignLaunch;

/// Request to launch a campaign
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "campaign_id": "social_media_holiday_2024",
    "budget": 15000.0,
    "audience": ["holiday_shoppers", "tech_enthusiasts"],
    "creatives": ["video_holiday_promo", "banner_gift_guide"]
}))]
pub struct CampaignLaunchRequest {
    /// Campaign identifier (non-empty)
    pub campaign_id: String,
    /// Budget in USD (must be > 0)
    pub budget: f64,
    /// Target audience segments (at least one)
    pub audience: Vec<String>,
    /// Creative asset IDs (at least one)
    pub creatives: Vec<String>,
}

impl From<CampaignLaunchRequest> for CampaignRequest {
    fn from(req: CampaignLaunchRequest) -> Self {
        CampaignRequest::new(req.campaign_id, req.budget, req.audience, req.creatives)
    }
}

/// Campaign launch response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampaignLaunchResponse {
    pub status: String,
    pub campaign_id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl From<CampaignLaunch> for CampaignLaunchResponse {
    fn from(launch: CampaignLaunch) -> Self {
        Self {
            status: "launched".to_string(),
            campaign_id: launch.campaign_id,
            timestamp: launch.timestamp,
            message: "Campaign launched successfully".to_string(),
        }
    }
}
