//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Campaign: launch request for a marketing campaign
//! - Playbook: named, versioned automation definition
//! - Route: generic module routing request
//! - LogRecord / MemoryRecord: append-only persisted records
//! - Notification: outbound announcement of an accepted request
//! - StoreStats: aggregate view over a record file

mod campaign;
mod log_record;
mod memory_record;
mod notification;
mod playbook;
mod route;
mod stats;

pub use campaign::*;
pub use log_record::*;
pub use memory_record::*;
pub use notification::*;
pub use playbook::*;
pub use route::*;
pub use stats::*;
