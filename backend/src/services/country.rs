//! Country store access

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::{Country, Region};

/// Service for reading and upserting countries
#[derive(Clone)]
pub struct CountryService {
    db: PgPool,
}

/// Database row for a country
#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    code: String,
    name: String,
    region: String,
    tags: Vec<String>,
}

impl TryFrom<CountryRow> for Country {
    type Error = AppError;

    fn try_from(row: CountryRow) -> Result<Self, Self::Error> {
        let region: Region = row
            .region
            .parse()
            .map_err(|e: shared::InvalidEnumValue| AppError::Internal(e.to_string()))?;
        Ok(Country {
            code: row.code,
            name: row.name,
            region,
            tags: row.tags,
        })
    }
}

impl CountryService {
    /// Create a new CountryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all countries, name-ordered
    pub async fn list_countries(&self) -> AppResult<Vec<Country>> {
        let rows = sqlx::query_as::<_, CountryRow>(
            "SELECT code, name, region, tags FROM countries ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(Country::try_from).collect()
    }

    /// Get a country by its ISO-2 code
    pub async fn get_country(&self, code: &str) -> AppResult<Option<Country>> {
        let row = sqlx::query_as::<_, CountryRow>(
            "SELECT code, name, region, tags FROM countries WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.db)
        .await?;

        row.map(Country::try_from).transpose()
    }

    /// Idempotent upsert keyed on the country code
    pub async fn upsert_country(&self, country: &Country) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO countries (code, name, region, tags)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (code)
            DO UPDATE SET name = $2, region = $3, tags = $4, updated_at = now()
            "#,
        )
        .bind(&country.code)
        .bind(&country.name)
        .bind(country.region.as_str())
        .bind(&country.tags)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Total number of countries
    pub async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    /// A few country codes, for diagnostics payloads
    pub async fn sample_codes(&self, limit: i64) -> AppResult<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT code FROM countries ORDER BY code LIMIT $1")
                .bind(limit)
                .fetch_all(&self.db)
                .await?;
        Ok(rows.into_iter().map(|(code,)| code).collect())
    }
}
