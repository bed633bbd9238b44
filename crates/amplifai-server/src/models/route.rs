//! Generic Route DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::empty_object;
use crate::application::RouteReceipt;

/// Body for `/route/{module_name}`; both fields are optional
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "payload": {"action": "process_data", "data": {"key": "value"}},
    "metadata": {"source": "external_api", "priority": "high"}
}))]
pub struct GenericRouteRequest {
    #[serde(default = "empty_object")]
    pub payload: serde_json::Value,
    #[serde(default = "empty_object")]
    pub metadata: serde_json::Value,
}

impl Default for GenericRouteRequest {
    fn default() -> Self {
        Self {
            payload: empty_object(),
            metadata: empty_object(),
        }
    }
}

impl GenericRouteRequest {
    /// Lenient decode: anything that is not a JSON object with the
    /// expected fields becomes the default (empty payload and metadata)
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Generic route acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericRouteResponse {
    pub status: String,
    pub module: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl From<RouteReceipt> for GenericRouteResponse {
    fn from(receipt: RouteReceipt) -> Self {
        Self {
            status: "routed".to_string(),
            message: format!("Request routed to {}", receipt.module_name),
            module: receipt.module_name,
            timestamp: receipt.timestamp,
        }
    }
}
