//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (record files, webhooks).
//!
//! Implementations of these traits live in the server's adapters.

mod notifier;
mod record_store;

// Re-exports
pub use notifier::*;
pub use record_store::*;
