//! HTTP handlers for raw climate lookups

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{BudgetTier, CrowdLevel, MonthlyClimate};
use crate::services::ClimateService;
use crate::AppState;

/// One climate row without its highlight strings, as served by the
/// compare-months widget.
#[derive(Debug, Serialize)]
pub struct ClimateSnapshot {
    pub month: u32,
    pub score: i32,
    pub temp_min_f: i32,
    pub temp_max_f: i32,
    pub rain_mm: i32,
    pub crowd_level: CrowdLevel,
    pub budget_tier: BudgetTier,
}

impl From<MonthlyClimate> for ClimateSnapshot {
    fn from(climate: MonthlyClimate) -> Self {
        Self {
            month: climate.month,
            score: climate.score,
            temp_min_f: climate.temp_min_f,
            temp_max_f: climate.temp_max_f,
            rain_mm: climate.rain_mm,
            crowd_level: climate.crowd_level,
            budget_tier: climate.budget_tier,
        }
    }
}

/// Get the climate row for one country and month
pub async fn get_climate(
    State(state): State<AppState>,
    Path((code, month)): Path<(String, u32)>,
) -> AppResult<Json<ClimateSnapshot>> {
    shared::validate_month(month).map_err(|msg| AppError::Validation {
        field: "month".to_string(),
        message: msg.to_string(),
    })?;
    let code = code.trim().to_uppercase();

    let service = ClimateService::new(state.db);
    let climate = service
        .get_month(&code, month)
        .await?
        .ok_or_else(|| AppError::NotFound("Climate data".to_string()))?;

    Ok(Json(climate.into()))
}
