//! # Drip Client
//!
//! HTTP client for the Drip marketing automation REST API.
//!
//! This crate contains:
//! - [`DripClient`] with one method per remote operation
//! - The [`Transport`] seam and its default reqwest-backed implementation
//! - Request building (basic auth, vendor media type) and response decoding
//!
//! ## Architecture
//! - Wire types live in `drip-domain`; this crate owns all I/O
//! - Every operation is a single request/response round trip
//! - No internal retries; retry policy belongs to the caller
//!
//! ## Errors
//! Callers check the `Result` first (a transport or decode failure means the
//! envelope cannot be trusted at all), then the envelope's own `errors` list
//! (the request reached the service but was semantically rejected).

pub mod client;
pub mod errors;
pub mod transport;

mod subscribers;
mod tags;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use client::{ClientConfig, DripClient, DripClientBuilder, DEFAULT_BASE_URL};
pub use errors::DripError;
pub use transport::{HttpTransport, HttpTransportBuilder, Transport};

// Wire types, re-exported so callers need a single dependency
pub use drip_domain::{
    ApiResponse, CodedError, ErrorCode, Links, ListSubscribersRequest, Meta, Subscriber,
    SubscribersResponse, TagPair, TagsRequest, UpdateSubscriber, UpdateSubscribersRequest,
};
