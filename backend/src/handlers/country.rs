//! HTTP handlers for country browsing endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{BestMonths, Country, MonthlyClimate, Place};
use crate::services::{ClimateService, CountryService, PlaceService, RecommendationService};
use crate::AppState;

/// Month selection query parameter; defaults to December and is clamped
/// into the calendar range rather than rejected.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<i64>,
}

impl MonthQuery {
    pub fn resolve(&self) -> u32 {
        shared::clamp_month(self.month.unwrap_or(12))
    }
}

/// Country detail payload: the country, one month's climate profile, and
/// its notable places.
#[derive(Debug, Serialize)]
pub struct CountryDetailResponse {
    pub ok: bool,
    pub country: Country,
    pub profile: MonthlyClimate,
    pub places: Vec<Place>,
}

/// Payload when the country exists but the requested month has no climate
/// row; carries enough diagnostics to tell a data gap from a bad request.
#[derive(Debug, Serialize)]
pub struct ClimateMissingResponse {
    pub ok: bool,
    pub error: &'static str,
    pub code: String,
    pub month: u32,
    pub country: Country,
    pub places: Vec<Place>,
    pub diagnostics: AvailableMonthsDiagnostics,
}

#[derive(Debug, Serialize)]
pub struct AvailableMonthsDiagnostics {
    pub available_months: Vec<u32>,
    pub hint: String,
}

/// Diagnostics attached to a country 404
#[derive(Debug, Serialize)]
pub struct CountryNotFoundResponse {
    pub ok: bool,
    pub error: &'static str,
    pub code: String,
    pub diagnostics: CountryDiagnostics,
}

#[derive(Debug, Serialize)]
pub struct CountryDiagnostics {
    pub total_countries: i64,
    pub sample_codes: Vec<String>,
    pub hint: String,
}

/// List all countries
pub async fn list_countries(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    let service = CountryService::new(state.db);
    let countries = service.list_countries().await?;
    Ok(Json(countries))
}

/// Get country detail with one month's climate profile and places
pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Response> {
    let code = normalize_code(&code)?;
    let month = query.resolve();

    let country_service = CountryService::new(state.db.clone());
    let climate_service = ClimateService::new(state.db.clone());
    let place_service = PlaceService::new(state.db);

    let Some(country) = country_service.get_country(&code).await? else {
        let total_countries = country_service.count().await?;
        let sample_codes = country_service.sample_codes(10).await?;
        let hint = if total_countries == 0 {
            "Run: atlas-seed".to_string()
        } else {
            format!("Country '{}' not in database", code)
        };
        let body = CountryNotFoundResponse {
            ok: false,
            error: "COUNTRY_NOT_FOUND",
            code,
            diagnostics: CountryDiagnostics {
                total_countries,
                sample_codes,
                hint,
            },
        };
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    };

    let places = place_service.list_by_country(&code).await?;

    let Some(profile) = climate_service.get_month(&code, month).await? else {
        let available_months = climate_service.available_months(&code).await?;
        let listed = available_months
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let hint = format!(
            "No climate data for month {}. Available months: {}",
            month,
            if listed.is_empty() { "none" } else { listed.as_str() }
        );
        let body = ClimateMissingResponse {
            ok: false,
            error: "CLIMATE_NOT_FOUND",
            code,
            month,
            country,
            places,
            diagnostics: AvailableMonthsDiagnostics {
                available_months,
                hint,
            },
        };
        return Ok(Json(body).into_response());
    };

    Ok(Json(CountryDetailResponse {
        ok: true,
        country,
        profile,
        places,
    })
    .into_response())
}

/// Get best/avoid month rankings for a country.
/// Serializes as JSON `null` when no climate data exists.
pub async fn get_best_months(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Option<BestMonths>>> {
    let code = normalize_code(&code)?;
    let service = RecommendationService::new(state.db);
    Ok(Json(service.best_months(&code).await))
}

/// Uppercase and sanity-check a path country code.
fn normalize_code(raw: &str) -> AppResult<String> {
    let code = raw.trim().to_uppercase();
    if code.len() < 2 {
        return Err(AppError::Validation {
            field: "code".to_string(),
            message: "Country code must be at least 2 characters".to_string(),
        });
    }
    Ok(code)
}
