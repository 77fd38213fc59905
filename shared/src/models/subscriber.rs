//! Email alert subscribers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subscriber to the monthly destination digest.
/// Unsubscribes are soft (`is_active = false`); re-subscribing the same
/// address reactivates the row instead of creating a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSubscriber {
    pub id: Uuid,
    /// Lowercased, trimmed address; unique
    pub email: String,
    /// Page the signup form was on, for attribution
    pub source_page: Option<String>,
    /// None until double-opt-in confirmation, when confirmation is required
    pub confirmed_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl EmailSubscriber {
    /// Whether this subscriber should receive digest mail.
    pub fn is_reachable(&self) -> bool {
        self.is_active && self.confirmed_at.is_some()
    }
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
