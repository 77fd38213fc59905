//! HTTP handler for the secret-gated analytics dashboard

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::AnalyticsEvent;
use crate::services::analytics::AnalyticsStats;
use crate::services::{AnalyticsService, SubscriberService};
use crate::AppState;

/// How many recent events the dashboard shows
const RECENT_EVENT_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub secret: Option<String>,
}

/// Dashboard payload: headline counters plus the most recent events
#[derive(Debug, Serialize)]
pub struct AnalyticsDashboardResponse {
    pub ok: bool,
    pub stats: DashboardStats,
    pub events: Vec<AnalyticsEvent>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    #[serde(flatten)]
    pub events: AnalyticsStats,
    pub subscribers: i64,
}

/// Get the analytics dashboard.
/// Disabled (404) when no admin secret is configured; the secret query
/// param must match otherwise.
pub async fn analytics_dashboard(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Json<AnalyticsDashboardResponse>> {
    let Some(admin_secret) = &state.config.admin.secret else {
        return Err(AppError::NotFound("Page".to_string()));
    };
    if query.secret.as_deref() != Some(admin_secret.as_str()) {
        return Err(AppError::Unauthorized("Invalid admin secret".to_string()));
    }

    let analytics = AnalyticsService::new(state.db.clone());
    let subscribers = SubscriberService::new(state.db);

    let stats = analytics.stats().await?;
    let events = analytics.recent_events(RECENT_EVENT_LIMIT).await?;
    let active_subscribers = subscribers.count_active().await?;

    Ok(Json(AnalyticsDashboardResponse {
        ok: true,
        stats: DashboardStats {
            events: stats,
            subscribers: active_subscribers,
        },
        events,
    }))
}
