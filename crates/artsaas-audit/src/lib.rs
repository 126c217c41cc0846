//! artsaas-audit
//!
//! Application-level audit events, logged through `tracing` so they land in
//! the same structured stream as request logs. Assessment submissions,
//! admin reviews, and donation state changes all emit one.

pub mod events;
