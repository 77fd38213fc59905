//! HTTP handler for first-party analytics events

use axum::{
    extract::State,
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::subscribe::OkResponse;
use crate::services::{AnalyticsService, RecordEventInput};
use crate::AppState;

/// Tracking payload from the client
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub event: String,
    pub path: Option<String>,
    pub referrer: Option<String>,
    pub properties: Option<serde_json::Value>,
}

/// Record an analytics event.
/// Rate limited per client IP; unknown event names are rejected; storage
/// failures are logged but never surfaced to the client.
pub async fn track_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<TrackRequest>,
) -> AppResult<Json<OkResponse>> {
    let ip = client_ip(&headers);

    if !state.rate_limiter.check(&ip) {
        return Err(AppError::RateLimitExceeded);
    }

    if input.event.trim().is_empty() {
        return Err(AppError::Validation {
            field: "event".to_string(),
            message: "Event is required".to_string(),
        });
    }
    if !shared::is_valid_event_type(&input.event) {
        return Err(AppError::Validation {
            field: "event".to_string(),
            message: "Invalid event type".to_string(),
        });
    }

    let service = AnalyticsService::new(state.db);
    let record = RecordEventInput {
        event: input.event,
        path: input.path,
        referrer: input.referrer,
        properties: input.properties,
        ip: (ip != "unknown").then(|| ip.clone()),
    };
    if let Err(err) = service.record_event(record).await {
        // Analytics must never break the client.
        tracing::error!("Failed to store analytics event: {err}");
    }

    Ok(Json(OkResponse { ok: true }))
}

/// Client IP from proxy headers, falling back to "unknown".
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
