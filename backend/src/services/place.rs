//! Notable place store access

use sqlx::PgPool;

use crate::error::AppResult;
use shared::Place;

/// Service for reading places
#[derive(Clone)]
pub struct PlaceService {
    db: PgPool,
}

/// Database row for a place
#[derive(Debug, sqlx::FromRow)]
struct PlaceRow {
    id: uuid::Uuid,
    country_code: String,
    name: String,
    place_type: String,
    short_description: String,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place {
            id: row.id,
            country_code: row.country_code,
            name: row.name,
            place_type: row.place_type,
            short_description: row.short_description,
        }
    }
}

impl PlaceService {
    /// Create a new PlaceService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Places for a country, name-ordered
    pub async fn list_by_country(&self, code: &str) -> AppResult<Vec<Place>> {
        let rows = sqlx::query_as::<_, PlaceRow>(
            r#"
            SELECT id, country_code, name, place_type, short_description
            FROM places
            WHERE country_code = $1
            ORDER BY name
            "#,
        )
        .bind(code)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    /// Total number of places
    pub async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
