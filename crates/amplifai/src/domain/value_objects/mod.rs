//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod log_level;

pub use log_level::*;
