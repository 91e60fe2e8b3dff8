//! Subscriber records and their hyperlink metadata

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hyperlink metadata attached to subscribers and response envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<String>,
}

/// A subscriber record owned by the remote service.
///
/// The client never mutates this locally; it is a read view of server data
/// or a write payload shape. Scalars that are business-meaningful at zero
/// (`utc_offset`, `lead_score`, `lifetime_value`, `base_lead_score`) are
/// optional so an absent field stays distinguishable from an explicit zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Subscription status, e.g. `active` or `unsubscribed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_lead_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
