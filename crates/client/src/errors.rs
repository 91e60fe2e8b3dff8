//! Client-facing error types
//!
//! Three tiers, never conflated: local precondition failures (detected
//! before any network activity, matchable by identity), transport and
//! decoding failures (the envelope cannot be trusted), and the coded
//! validation errors the service returns inside successful responses (those
//! live in the envelope's `errors` list, not here).

use thiserror::Error;

/// Errors returned by [`crate::DripClient`] operations.
#[derive(Debug, Error)]
pub enum DripError {
    /// The API key was empty at construction time.
    #[error("api key must not be empty")]
    BadApiKey,

    /// The account identifier was empty at construction time.
    #[error("account id must not be empty")]
    BadAccountId,

    /// An identifier argument (subscriber id/email or tag) was empty. No
    /// network call was made.
    #[error("identifier must not be empty")]
    IdentifierRequired,

    /// The client or its transport could not be constructed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The method/URL/header combination did not form a valid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The transport failed before a response was received (DNS, connection,
    /// timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-JSON body, e.g. an HTML error page or
    /// a rate-limit page. The raw body text is preserved for debugging.
    #[error("unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse {
        /// Numeric HTTP status of the response.
        status: u16,
        /// Raw body text as received.
        body: String,
    },

    /// The response declared JSON but the body was malformed or structurally
    /// incompatible with the expected envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}
