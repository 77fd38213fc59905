//! Monthly climate store access

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::{BudgetTier, CrowdLevel, MonthlyClimate};

/// Service for reading and upserting monthly climate rows
#[derive(Clone)]
pub struct ClimateService {
    db: PgPool,
}

/// Database row for a monthly climate record
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClimateRow {
    pub country_code: String,
    pub month: i32,
    pub score: i32,
    pub temp_min_f: i32,
    pub temp_max_f: i32,
    pub rain_mm: i32,
    pub crowd_level: String,
    pub budget_tier: String,
    pub highlights: Vec<String>,
}

impl TryFrom<ClimateRow> for MonthlyClimate {
    type Error = AppError;

    fn try_from(row: ClimateRow) -> Result<Self, Self::Error> {
        let crowd_level: CrowdLevel = row
            .crowd_level
            .parse()
            .map_err(|e: shared::InvalidEnumValue| AppError::Internal(e.to_string()))?;
        let budget_tier: BudgetTier = row
            .budget_tier
            .parse()
            .map_err(|e: shared::InvalidEnumValue| AppError::Internal(e.to_string()))?;

        Ok(MonthlyClimate {
            country_code: row.country_code,
            month: row.month as u32,
            score: row.score,
            temp_min_f: row.temp_min_f,
            temp_max_f: row.temp_max_f,
            rain_mm: row.rain_mm,
            crowd_level,
            budget_tier,
            highlights: row.highlights,
        })
    }
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get the climate row for one country and month
    pub async fn get_month(&self, code: &str, month: u32) -> AppResult<Option<MonthlyClimate>> {
        let row = sqlx::query_as::<_, ClimateRow>(
            r#"
            SELECT country_code, month, score, temp_min_f, temp_max_f,
                   rain_mm, crowd_level, budget_tier, highlights
            FROM climates
            WHERE country_code = $1 AND month = $2
            "#,
        )
        .bind(code)
        .bind(month as i32)
        .fetch_optional(&self.db)
        .await?;

        row.map(MonthlyClimate::try_from).transpose()
    }

    /// All climate rows for a country, month-ascending
    pub async fn list_for_country(&self, code: &str) -> AppResult<Vec<MonthlyClimate>> {
        let rows = sqlx::query_as::<_, ClimateRow>(
            r#"
            SELECT country_code, month, score, temp_min_f, temp_max_f,
                   rain_mm, crowd_level, budget_tier, highlights
            FROM climates
            WHERE country_code = $1
            ORDER BY month
            "#,
        )
        .bind(code)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(MonthlyClimate::try_from).collect()
    }

    /// Months a country has climate rows for, for diagnostics payloads
    pub async fn available_months(&self, code: &str) -> AppResult<Vec<u32>> {
        let rows: Vec<(i32,)> = sqlx::query_as(
            "SELECT month FROM climates WHERE country_code = $1 ORDER BY month",
        )
        .bind(code)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(|(m,)| m as u32).collect())
    }

    /// Idempotent upsert keyed on (country_code, month)
    pub async fn upsert_month(&self, climate: &MonthlyClimate) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO climates (
                country_code, month, score, temp_min_f, temp_max_f,
                rain_mm, crowd_level, budget_tier, highlights
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (country_code, month)
            DO UPDATE SET score = $3, temp_min_f = $4, temp_max_f = $5,
                          rain_mm = $6, crowd_level = $7, budget_tier = $8,
                          highlights = $9, updated_at = now()
            "#,
        )
        .bind(&climate.country_code)
        .bind(climate.month as i32)
        .bind(climate.score)
        .bind(climate.temp_min_f)
        .bind(climate.temp_max_f)
        .bind(climate.rain_mm)
        .bind(climate.crowd_level.as_str())
        .bind(climate.budget_tier.as_str())
        .bind(&climate.highlights)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Total number of climate rows
    pub async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM climates")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
