//! Route definitions for ZenTrip Atlas
//!
//! Every surface here is public: the site is an anonymous content product,
//! so there is no auth layer.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Country browsing
        .nest("/countries", country_routes())
        // Raw climate rows
        .nest("/climate", climate_routes())
        // Month-based explorer listing
        .route("/recommendations", get(handlers::get_recommendations))
        // Email alert signup
        .route("/subscribe", post(handlers::subscribe))
        // First-party analytics
        .route("/track", post(handlers::track_event))
        // Secret-gated analytics dashboard
        .route("/admin/analytics", get(handlers::analytics_dashboard))
}

/// Country browsing routes
fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_countries))
        .route("/:code", get(handlers::get_country))
        .route("/:code/best-months", get(handlers::get_best_months))
}

/// Climate lookup routes
fn climate_routes() -> Router<AppState> {
    Router::new().route("/:code/:month", get(handlers::get_climate))
}
