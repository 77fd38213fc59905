//! ZenTrip Atlas - Alerts Runner
//!
//! Sends the monthly digest: for every active, confirmed subscriber, the
//! current month's top three destinations. Without a configured mail
//! provider this is a logged dry run. In production, wire it to a cron job.

use chrono::{Datelike, Utc};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{format_temp_range_c, month_name};
use zentrip_atlas_backend::config::Config;
use zentrip_atlas_backend::external::{Mailer, SendOutcome};
use zentrip_atlas_backend::services::{MonthDestination, RecommendationService, SubscriberService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_alerts=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("ZenTrip Atlas - Alerts Runner");

    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    let subscribers = SubscriberService::new(db_pool.clone())
        .list_reachable()
        .await?;
    tracing::info!("Found {} active subscriber(s)", subscribers.len());

    if subscribers.is_empty() {
        tracing::info!("No subscribers to notify. Exiting.");
        return Ok(());
    }

    let current_month = Utc::now().month();
    let current_month_name = month_name(current_month);

    let top = RecommendationService::new(db_pool)
        .top_n_for_month(current_month, 3)
        .await?;
    tracing::info!("Current month: {current_month_name}");
    for (i, destination) in top.iter().enumerate() {
        tracing::info!(
            "  {}. {} (score: {})",
            i + 1,
            destination.name,
            destination.score
        );
    }

    let subject = format!("Your {current_month_name} Travel Picks from ZenTrip Atlas");
    let html = digest_html(current_month_name, &top);
    let mailer = Mailer::from_config(&config.email);

    let mut sent = 0;
    let mut dry = 0;
    for subscriber in &subscribers {
        match mailer.send(&subscriber.email, &subject, &html).await {
            Ok(SendOutcome::Sent { message_id }) => {
                tracing::info!("Sent to {} ({message_id})", subscriber.email);
                sent += 1;
            }
            Ok(SendOutcome::DryRun) => dry += 1,
            Err(err) => tracing::error!("Failed to send to {}: {err}", subscriber.email),
        }
    }

    if dry > 0 {
        tracing::info!(
            "Dry run complete for {dry} subscriber(s). \
             To send real emails, configure ATLAS_EMAIL__RESEND_API_KEY."
        );
    }
    if sent > 0 {
        tracing::info!("Delivered {sent} digest(s)");
    }

    Ok(())
}

/// Small HTML digest body listing the month's top destinations
fn digest_html(month: &str, destinations: &[MonthDestination]) -> String {
    let mut items = String::new();
    for destination in destinations {
        items.push_str(&format!(
            "<li><strong>{}</strong>: score {}, {}, around {}</li>",
            destination.name,
            destination.score,
            destination.budget_tier,
            format_temp_range_c(destination.temp_min_f, destination.temp_max_f),
        ));
    }
    format!(
        "<h1>Where to go in {month}</h1>\
         <p>Our top picks this month:</p>\
         <ol>{items}</ol>\
         <p>Happy travels,<br/>ZenTrip Atlas</p>"
    )
}
