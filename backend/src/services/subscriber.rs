//! Email subscriber management

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{normalize_email, validate_email, EmailSubscriber};

/// Service for managing digest subscribers
#[derive(Clone)]
pub struct SubscriberService {
    db: PgPool,
}

/// Database row for a subscriber
#[derive(Debug, sqlx::FromRow)]
struct SubscriberRow {
    id: Uuid,
    email: String,
    source_page: Option<String>,
    confirmed_at: Option<DateTime<Utc>>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<SubscriberRow> for EmailSubscriber {
    fn from(row: SubscriberRow) -> Self {
        EmailSubscriber {
            id: row.id,
            email: row.email,
            source_page: row.source_page,
            confirmed_at: row.confirmed_at,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl SubscriberService {
    /// Create a new SubscriberService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Subscribe an address.
    /// Existing inactive rows are reactivated; existing active rows are
    /// left untouched. New rows are confirmed immediately unless
    /// confirmation is required.
    pub async fn subscribe(
        &self,
        email: &str,
        source_page: Option<&str>,
        confirm_required: bool,
    ) -> AppResult<()> {
        validate_email(email).map_err(|msg| AppError::Validation {
            field: "email".to_string(),
            message: msg.to_string(),
        })?;
        let email = normalize_email(email);

        let existing = sqlx::query_as::<_, SubscriberRow>(
            r#"
            SELECT id, email, source_page, confirmed_at, is_active, created_at
            FROM email_subscribers
            WHERE email = $1
            "#,
        )
        .bind(&email)
        .fetch_optional(&self.db)
        .await?;

        if let Some(subscriber) = existing {
            if !subscriber.is_active {
                sqlx::query("UPDATE email_subscribers SET is_active = TRUE WHERE email = $1")
                    .bind(&email)
                    .execute(&self.db)
                    .await?;
            }
            return Ok(());
        }

        let confirmed_at = (!confirm_required).then(Utc::now);
        sqlx::query(
            r#"
            INSERT INTO email_subscribers (email, source_page, confirmed_at, is_active)
            VALUES ($1, $2, $3, TRUE)
            "#,
        )
        .bind(&email)
        .bind(source_page)
        .bind(confirmed_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Active, confirmed subscribers, newest first. The digest audience.
    pub async fn list_reachable(&self) -> AppResult<Vec<EmailSubscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            r#"
            SELECT id, email, source_page, confirmed_at, is_active, created_at
            FROM email_subscribers
            WHERE is_active = TRUE AND confirmed_at IS NOT NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(EmailSubscriber::from).collect())
    }

    /// Number of active subscribers
    pub async fn count_active(&self) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM email_subscribers WHERE is_active = TRUE")
                .fetch_one(&self.db)
                .await?;
        Ok(count)
    }
}
