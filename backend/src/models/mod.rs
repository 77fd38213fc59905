//! Database models for ZenTrip Atlas
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
