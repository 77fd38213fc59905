//! Seed pipeline: persists synthesized climate data
//!
//! Countries and climates upsert on their natural keys so re-seeding is
//! idempotent. Places carry no stable key and are replaced wholesale.

use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{ClimateService, CountryService};
use shared::{generate_climate_data, ClimatePatterns, CountrySeed, NewPlace};

/// Service for running the climate synthesis batch job
#[derive(Clone)]
pub struct SeedService {
    db: PgPool,
}

/// Row counts after a seed run
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub countries: i64,
    pub climates: i64,
    pub places: i64,
}

impl SeedService {
    /// Create a new SeedService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Run the full seed: upsert countries, synthesize and upsert all
    /// climate rows, replace places. Fails fast on any storage error.
    pub async fn run(
        &self,
        seeds: &[CountrySeed],
        patterns: &ClimatePatterns,
        places: &[NewPlace],
    ) -> AppResult<SeedSummary> {
        let countries = CountryService::new(self.db.clone());
        for seed in seeds {
            countries.upsert_country(&seed.country()).await?;
        }
        tracing::info!("Upserted {} countries", seeds.len());

        let climates = ClimateService::new(self.db.clone());
        let all_climates = generate_climate_data(seeds, patterns);
        for climate in &all_climates {
            climates.upsert_month(climate).await?;
        }
        tracing::info!(
            "Upserted {} climates ({} countries x 12 months)",
            all_climates.len(),
            seeds.len()
        );

        self.replace_places(places).await?;
        tracing::info!("Inserted {} places", places.len());

        self.counts().await
    }

    /// Replace the whole places table
    pub async fn replace_places(&self, places: &[NewPlace]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM places").execute(&mut *tx).await?;
        for place in places {
            sqlx::query(
                r#"
                INSERT INTO places (country_code, name, place_type, short_description)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&place.country_code)
            .bind(&place.name)
            .bind(&place.place_type)
            .bind(&place.short_description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Current row counts across the seeded tables
    pub async fn counts(&self) -> AppResult<SeedSummary> {
        let (countries,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.db)
            .await?;
        let (climates,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM climates")
            .fetch_one(&self.db)
            .await?;
        let (places,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
            .fetch_one(&self.db)
            .await?;

        Ok(SeedSummary {
            countries,
            climates,
            places,
        })
    }
}
