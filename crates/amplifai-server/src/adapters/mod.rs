//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod formatters;
pub mod jsonl;
pub mod webhook;

// Re-exports
pub use jsonl::JsonlStore;
pub use webhook::HttpWebhook;
