//! # Drip Domain
//!
//! Wire-level data types for the Drip marketing automation REST API.
//!
//! This crate contains:
//! - Request payloads (list filters, create-or-update batches, tag batches)
//! - Response envelopes with their pagination and hyperlink metadata
//! - The coded validation errors the service returns inside 2xx responses
//!
//! ## Architecture
//! - No dependency on the HTTP layer; pure data structures
//! - Optional wire fields are `Option<_>` so "unset" never reaches the wire
//!   while present-but-empty values do

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{CodedError, ErrorCode};
pub use types::*;
