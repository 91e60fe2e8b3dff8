//! Response envelopes and pagination metadata
//!
//! Entities and coded errors are independent channels: a transport-successful
//! call may still carry a non-empty `errors` list describing per-field
//! validation problems. Callers check both.

use serde::{Deserialize, Serialize};

use crate::errors::CodedError;
use crate::types::subscriber::{Links, Subscriber};

/// Pagination metadata returned on list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

/// Envelope for operations that return subscribers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribersResponse {
    /// HTTP status of the transport response. Stamped by the client after
    /// the round trip, never decoded from the body.
    #[serde(skip)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub subscribers: Vec<Subscriber>,
    #[serde(default)]
    pub errors: Vec<CodedError>,
}

/// Envelope for operations that return only a status and an error list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status of the transport response. Stamped by the client after
    /// the round trip, never decoded from the body.
    #[serde(skip)]
    pub status_code: u16,
    #[serde(default)]
    pub errors: Vec<CodedError>,
}
