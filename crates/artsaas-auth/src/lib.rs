//! artsaas-auth
//!
//! Validation of the platform's HS256 session tokens. Token issuance is the
//! identity provider's job; only verification and claim extraction live in
//! this repository.

pub mod error;
pub mod jwt;
