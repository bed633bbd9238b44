//! Route - Generic module routing request

use serde::{Deserialize, Serialize};

/// A request addressed to a named module
///
/// No module allow-list exists; the request is recorded and acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRequest {
    pub module_name: String,
    pub payload: serde_json::Value,
    pub metadata: serde_json::Value,
}

impl RouteRequest {
    pub fn new(
        module_name: impl Into<String>,
        payload: serde_json::Value,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            payload,
            metadata,
        }
    }
}
