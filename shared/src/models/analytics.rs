//! Lightweight first-party analytics events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event names the tracking endpoint accepts. Anything else is rejected.
pub const VALID_EVENTS: [&str; 6] = [
    "page_view",
    "outbound_click",
    "save_trip",
    "share_click",
    "subscribe",
    "compare_months",
];

/// Whether an event name is one of the accepted analytics events.
pub fn is_valid_event_type(event: &str) -> bool {
    VALID_EVENTS.contains(&event)
}

/// A stored analytics event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: Uuid,
    pub event: String,
    pub path: Option<String>,
    pub referrer: Option<String>,
    pub properties: Option<serde_json::Value>,
    /// Client IP, truncated for storage; absent when unknown
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}
