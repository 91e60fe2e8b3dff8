//! Request payloads
//!
//! Every optional field is skipped from serialization when `None`, so an
//! unset field never reaches the wire. A present-but-empty value (an empty
//! tag list, an empty string) is serialized and instructs the server to
//! clear the field.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filters and pagination for listing subscribers.
///
/// The default request lists every subscriber on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSubscribersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Create-or-update payload for a single subscriber.
///
/// `email` or `id` keys the mutation. `None` leaves the server-held value
/// unchanged; a present empty value clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Replacement address when changing a subscriber's email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_lead_score: Option<i32>,
}

/// Batch wrapper for creating or updating subscribers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscribersRequest {
    #[serde(default)]
    pub subscribers: Vec<UpdateSubscriber>,
}

/// A single (email, tag) association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub email: String,
    pub tag: String,
}

/// Batch wrapper for applying tags to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsRequest {
    #[serde(default)]
    pub tags: Vec<TagPair>,
}
