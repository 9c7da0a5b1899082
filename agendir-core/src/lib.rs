//! Core types for the agendir ecosystem.
//!
//! This crate provides everything shared between the agendir CLI and
//! account source binaries:
//! - `account` snapshot types (`Account`, `Calendar`, `Event`)
//! - the `agenda` aggregation pipeline (select, sort, group)
//! - `snapshot` persistence, the `source` subprocess protocol, and
//!   configuration

pub mod account;
pub mod agenda;
pub mod agendir;
pub mod config;
pub mod error;
pub mod protocol;
pub mod sample;
pub mod snapshot;
pub mod source;

// Re-export the model and pipeline types at crate root for convenience
pub use account::*;
pub use agenda::*;
