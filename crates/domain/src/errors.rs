//! Coded validation errors returned by the Drip API
//!
//! These arrive inside successful (2xx) responses, one entry per violated
//! field or rule, and are a separate channel from transport failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error codes returned by the Drip API.
///
/// The set is closed; callers can match exhaustively when branching on the
/// kind of rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The attribute is required.
    PresenceError,
    /// The length of the attribute is out of bounds.
    LengthError,
    /// The attribute must be unique.
    UniquenessError,
    /// The attribute must be a valid email address.
    EmailError,
    /// The attribute must be a valid URL.
    UrlError,
    /// The attribute must be a valid domain name.
    DomainError,
    /// The attribute must be a valid time in ISO-8601 format.
    TimeError,
    /// The attribute must be a comma-separated list of email addresses.
    EmailAddressListError,
    /// The attribute must be a seven-digit days-of-the-week mask.
    DaysOfTheWeekError,
    /// The resource has been disabled or deleted.
    UnavailableError,
    /// A resource identifier or object is not formatted correctly.
    FormatError,
    /// A numeric value is out of range.
    RangeError,
}

/// A validation failure reported by the service inside a successful response.
///
/// Decoding a response whose `errors` list is non-empty is not a failure;
/// the caller decides whether the entries mean "abort" or "partial success".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct CodedError {
    /// Machine-readable rejection kind.
    pub code: ErrorCode,
    /// Name of the offending attribute.
    #[serde(default)]
    pub attribute: String,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
}
