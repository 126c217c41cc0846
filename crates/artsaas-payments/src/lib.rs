//! artsaas-payments
//!
//! Stripe glue: currency rules, the flat 5% platform-fee split, PaymentIntent
//! creation, and webhook event dispatch. Record persistence stays with the
//! caller; this crate never touches the store.

pub mod currency;
pub mod error;
pub mod fees;
pub mod intent;
pub mod webhook;
