//! Analytics event storage and per-IP rate limiting

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use shared::AnalyticsEvent;

/// Max stored length of a client IP (fits IPv6 with zone)
const MAX_IP_LEN: usize = 45;

/// In-memory fixed-window rate limiter keyed by client IP.
/// State is process-local; that is acceptable for abuse damping on a
/// single-instance deployment.
pub struct RateLimiter {
    max_per_window: u32,
    window: Duration,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

impl RateLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Whether a request from this IP is allowed. Counts the request.
    pub fn check(&self, ip: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        match entries.get_mut(ip) {
            Some(entry) if now <= entry.reset_at => {
                if entry.count >= self.max_per_window {
                    return false;
                }
                entry.count += 1;
                true
            }
            _ => {
                entries.insert(
                    ip.to_string(),
                    WindowEntry {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                true
            }
        }
    }

    /// Drop expired windows. Called opportunistically; correctness does
    /// not depend on it.
    pub fn cleanup(&self) {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, entry| now <= entry.reset_at);
    }
}

/// Input for recording an analytics event
#[derive(Debug)]
pub struct RecordEventInput {
    pub event: String,
    pub path: Option<String>,
    pub referrer: Option<String>,
    pub properties: Option<serde_json::Value>,
    pub ip: Option<String>,
}

/// Service for storing analytics events
#[derive(Clone)]
pub struct AnalyticsService {
    db: PgPool,
}

/// Database row for a stored event
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    event: String,
    path: Option<String>,
    referrer: Option<String>,
    properties: Option<serde_json::Value>,
    ip: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for AnalyticsEvent {
    fn from(row: EventRow) -> Self {
        AnalyticsEvent {
            id: row.id,
            event: row.event,
            path: row.path,
            referrer: row.referrer,
            properties: row.properties,
            ip: row.ip,
            created_at: row.created_at,
        }
    }
}

/// Headline counters for the admin dashboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalyticsStats {
    pub total_events: i64,
    pub page_views: i64,
    pub outbound_clicks: i64,
    pub save_trips: i64,
}

impl AnalyticsService {
    /// Create a new AnalyticsService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Store one event
    pub async fn record_event(&self, input: RecordEventInput) -> AppResult<()> {
        let ip = input.ip.map(|ip| truncate(&ip, MAX_IP_LEN));

        sqlx::query(
            r#"
            INSERT INTO analytics_events (event, path, referrer, properties, ip)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&input.event)
        .bind(&input.path)
        .bind(&input.referrer)
        .bind(&input.properties)
        .bind(&ip)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Most recent events, newest first
    pub async fn recent_events(&self, limit: i64) -> AppResult<Vec<AnalyticsEvent>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, event, path, referrer, properties, ip, created_at
            FROM analytics_events
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(AnalyticsEvent::from).collect())
    }

    /// Headline counters across all stored events
    pub async fn stats(&self) -> AppResult<AnalyticsStats> {
        let (total_events,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analytics_events")
            .fetch_one(&self.db)
            .await?;

        let mut by_event = [0i64; 3];
        for (slot, event) in by_event
            .iter_mut()
            .zip(["page_view", "outbound_click", "save_trip"])
        {
            let (count,): (i64,) =
                sqlx::query_as("SELECT COUNT(*) FROM analytics_events WHERE event = $1")
                    .bind(event)
                    .fetch_one(&self.db)
                    .await?;
            *slot = count;
        }

        Ok(AnalyticsStats {
            total_events,
            page_views: by_event[0],
            outbound_clicks: by_event[1],
            save_trips: by_event[2],
        })
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    s.chars().take(max_len).collect()
}
