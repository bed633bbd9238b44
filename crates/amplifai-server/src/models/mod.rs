//! API Data Models
//!
//! - Campaign: launch request/response
//! - Playbook: JSON and multipart upload
//! - Route: generic module routing
//! - Stats: log and memory store summaries
//! - Status: service metadata, health and diagnostics

mod campaign;
mod playbook;
mod route;
mod stats;
mod status;

pub use campaign::*;
pub use playbook::*;
pub use route::*;
pub use stats::*;
pub use status::*;

pub(crate) fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}
