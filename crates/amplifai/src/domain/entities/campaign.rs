//! Campaign - Marketing campaign launch request

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A request to launch a campaign
///
/// Nothing is executed on launch; an accepted request is only recorded
/// and announced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignRequest {
    /// Caller-chosen campaign identifier
    pub campaign_id: String,
    /// Budget in USD, strictly positive
    pub budget: f64,
    /// Target audience segments (at least one)
    pub audience: Vec<String>,
    /// Creative asset IDs (at least one)
    pub creatives: Vec<String>,
}

impl CampaignRequest {
    pub fn new(
        campaign_id: impl Into<String>,
        budget: f64,
        audience: Vec<String>,
        creatives: Vec<String>,
    ) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            budget,
            audience,
            creatives,
        }
    }

    /// Check the launch invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.campaign_id.trim().is_empty() {
            return Err(DomainError::invalid_field("campaign_id", "must not be empty"));
        }
        // NaN fails this comparison too
        if !(self.budget > 0.0) || !self.budget.is_finite() {
            return Err(DomainError::invalid_field(
                "budget",
                "must be a positive number",
            ));
        }
        if self.audience.is_empty() {
            return Err(DomainError::invalid_field(
                "audience",
                "at least one audience segment is required",
            ));
        }
        if self.creatives.is_empty() {
            return Err(DomainError::invalid_field(
                "creatives",
                "at least one creative is required",
            ));
        }
        Ok(())
    }
}
