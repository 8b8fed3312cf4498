//! # Xendit Types
//!
//! Request types, validation rules and error types for the Xendit payments
//! API. This crate does no IO: it only describes what may be sent and checks
//! it before the client crate puts anything on the wire.
//!
//! ## Layout
//!
//! - `domain/` - credentials, amounts and the closed code sets
//! - `dto` - request parameters and per-call headers
//! - `validation/` - fail-fast validators for each resource
//! - `error` - validation and API error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use domain::{
    AccountType, Amount, Country, Credentials, Currency, DEFAULT_BASE_URL, PaymentRequestType,
};
pub use dto::*;
pub use error::{ApiError, ValidationError};
