//! AmplifAI Domain Library
//!
//! Core domain types and interfaces for the AmplifAI Execution Engine.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request entities, records and their validation
//!   - `entities/`: Campaign, Playbook, Route, LogRecord, MemoryRecord, Notification
//!   - `value_objects/`: LogLevel
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `RecordStore`: append-only record persistence
//!   - `Notifier`: outbound notification delivery
//!
//! # Usage
//!
//! ```rust,ignore
//! use amplifai::{CampaignRequest, MemoryRecord, RecordStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    parse_tags, CampaignRequest, DomainError, LogLevel, LogRecord, MemoryRecord, Notification,
    NotificationKind, PlaybookFile, PlaybookFileUpload, PlaybookId, PlaybookUpload,
    RouteRequest, StoreStats, DEFAULT_PLAYBOOK_VERSION, KIND_CAMPAIGN, KIND_PLAYBOOK,
    KIND_ROUTE,
};
pub use ports::{Notifier, Record, RecordScan, RecordStore};
