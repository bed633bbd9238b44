//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! record stores and the notifier.

mod dispatcher;
mod ingest_service;
mod stats_service;

pub use dispatcher::NotificationDispatcher;
pub use ingest_service::{CampaignLaunch, IngestService, PlaybookReceipt, RouteReceipt};
pub use stats_service::StatsService;

#[cfg(test)]
pub(crate) use dispatcher::testing;
