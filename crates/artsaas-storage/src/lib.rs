//! artsaas-storage
//!
//! The platform's record store: JSON documents in an S3 bucket, plus raw
//! objects for artwork images. `objects` is the byte-level wrapper around
//! the SDK; `records` is the typed layer the API works through.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
