//! artsaas-core
//!
//! Pure domain types and record-store key conventions.
//! No AWS or HTTP dependency — this is the shared vocabulary of the ArtSaaS
//! platform.

pub mod error;
pub mod models;
pub mod record_keys;
