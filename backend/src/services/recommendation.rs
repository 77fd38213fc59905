//! Destination recommendations: the month explorer listing and the
//! per-country best/avoid month rankings

use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::climate::ClimateService;
use shared::{rank_months, BestMonths, BudgetTier, CrowdLevel, Region};

/// Service for computing destination recommendations
#[derive(Clone)]
pub struct RecommendationService {
    db: PgPool,
}

/// One explorer listing entry: a country joined with its climate row for
/// the selected month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthDestination {
    pub code: String,
    pub name: String,
    pub region: Region,
    pub tags: Vec<String>,
    pub score: i32,
    pub temp_min_f: i32,
    pub temp_max_f: i32,
    pub rain_mm: i32,
    pub crowd_level: CrowdLevel,
    pub budget_tier: BudgetTier,
    pub highlights: Vec<String>,
}

/// Database row for the explorer join
#[derive(Debug, sqlx::FromRow)]
struct MonthDestinationRow {
    code: String,
    name: String,
    region: String,
    tags: Vec<String>,
    score: i32,
    temp_min_f: i32,
    temp_max_f: i32,
    rain_mm: i32,
    crowd_level: String,
    budget_tier: String,
    highlights: Vec<String>,
}

impl TryFrom<MonthDestinationRow> for MonthDestination {
    type Error = AppError;

    fn try_from(row: MonthDestinationRow) -> Result<Self, Self::Error> {
        let enum_err = |e: shared::InvalidEnumValue| AppError::Internal(e.to_string());
        Ok(MonthDestination {
            code: row.code,
            name: row.name,
            region: row.region.parse().map_err(enum_err)?,
            tags: row.tags,
            score: row.score,
            temp_min_f: row.temp_min_f,
            temp_max_f: row.temp_max_f,
            rain_mm: row.rain_mm,
            crowd_level: row.crowd_level.parse().map_err(enum_err)?,
            budget_tier: row.budget_tier.parse().map_err(enum_err)?,
            highlights: row.highlights,
        })
    }
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All destinations for a month, best score first
    pub async fn top_for_month(&self, month: u32) -> AppResult<Vec<MonthDestination>> {
        self.destinations_for_month(month, None).await
    }

    /// The N best destinations for a month, for the email digest
    pub async fn top_n_for_month(&self, month: u32, limit: i64) -> AppResult<Vec<MonthDestination>> {
        self.destinations_for_month(month, Some(limit)).await
    }

    async fn destinations_for_month(
        &self,
        month: u32,
        limit: Option<i64>,
    ) -> AppResult<Vec<MonthDestination>> {
        let rows = sqlx::query_as::<_, MonthDestinationRow>(
            r#"
            SELECT co.code, co.name, co.region, co.tags,
                   cl.score, cl.temp_min_f, cl.temp_max_f, cl.rain_mm,
                   cl.crowd_level, cl.budget_tier, cl.highlights
            FROM climates cl
            JOIN countries co ON co.code = cl.country_code
            WHERE cl.month = $1
            ORDER BY cl.score DESC, co.name
            LIMIT $2
            "#,
        )
        .bind(month as i32)
        // LIMIT NULL means no limit in Postgres
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(MonthDestination::try_from).collect()
    }

    /// Best and avoid months for a country.
    ///
    /// `None` means "no recommendation available": either the country has
    /// no climate rows, or the read failed. The failure path is logged but
    /// deliberately collapses into the no-data result so rendering layers
    /// never see a storage exception.
    pub async fn best_months(&self, country_code: &str) -> Option<BestMonths> {
        let climates = ClimateService::new(self.db.clone());
        match climates.list_for_country(country_code).await {
            Ok(rows) => rank_months(&rows),
            Err(err) => {
                tracing::warn!(
                    country_code,
                    "climate read failed, returning no recommendation: {err}"
                );
                None
            }
        }
    }
}
