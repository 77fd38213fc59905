//! HTTP handlers for the month-based explorer listing

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::country::MonthQuery;
use crate::services::{ClimateService, CountryService, MonthDestination, PlaceService, RecommendationService};
use crate::AppState;

/// Explorer listing: every country's climate row for one month,
/// best-scoring first.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub ok: bool,
    pub month: u32,
    pub results: Vec<MonthDestination>,
}

/// Empty-table payload pointing at the seed job
#[derive(Debug, Serialize)]
pub struct NoDataResponse {
    pub ok: bool,
    pub error: &'static str,
    pub month: u32,
    pub diagnostics: SeedDiagnostics,
}

#[derive(Debug, Serialize)]
pub struct SeedDiagnostics {
    pub total_countries: i64,
    pub total_climates: i64,
    pub total_places: i64,
    pub hint: String,
}

/// Get ranked destinations for a month
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Response> {
    let month = query.resolve();

    let service = RecommendationService::new(state.db.clone());
    let results = service.top_for_month(month).await?;

    if results.is_empty() {
        // Distinguish an unseeded database from a genuine gap.
        let total_countries = CountryService::new(state.db.clone()).count().await?;
        let total_climates = ClimateService::new(state.db.clone()).count().await?;
        let total_places = PlaceService::new(state.db).count().await?;
        let hint = if total_countries == 0 {
            "Run: atlas-seed".to_string()
        } else {
            format!("No climates found for month {}", month)
        };
        let body = NoDataResponse {
            ok: false,
            error: "NO_DATA_FOR_MONTH",
            month,
            diagnostics: SeedDiagnostics {
                total_countries,
                total_climates,
                total_places,
                hint,
            },
        };
        return Ok(Json(body).into_response());
    }

    Ok(Json(RecommendationsResponse {
        ok: true,
        month,
        results,
    })
    .into_response())
}
