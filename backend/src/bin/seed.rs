//! ZenTrip Atlas - Seed Runner
//!
//! Upserts the reference country table, synthesizes all monthly climate
//! rows (24 countries x 12 months), and replaces the places table.
//! Safe to re-run: identical input produces identical rows.

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{ClimatePatterns, CountrySeed, Hemisphere, NewPlace, Region};
use zentrip_atlas_backend::config::Config;
use zentrip_atlas_backend::services::SeedService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_seed=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting seed...");

    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let service = SeedService::new(db_pool);
    let summary = service
        .run(&reference_countries(), &ClimatePatterns::reference(), &reference_places())
        .await?;

    tracing::info!(
        "Seed complete: {} countries, {} climates, {} places",
        summary.countries,
        summary.climates,
        summary.places
    );

    Ok(())
}

fn seed(
    code: &str,
    name: &str,
    region: Region,
    tags: [&str; 4],
    hemisphere: Hemisphere,
    base_temp_f: f64,
    seasonality_f: f64,
) -> CountrySeed {
    CountrySeed {
        code: code.to_string(),
        name: name.to_string(),
        region,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        hemisphere,
        base_temp_f,
        seasonality_f,
    }
}

/// The 24 reference countries with their tags and base climate profiles
fn reference_countries() -> Vec<CountrySeed> {
    use Hemisphere::{North as N, South as S};
    use Region::*;

    vec![
        seed("ES", "Spain", Europe, ["beach", "culture", "food", "nightlife"], N, 60.0, 25.0),
        seed("IT", "Italy", Europe, ["culture", "food", "history", "romance"], N, 55.0, 28.0),
        seed("FR", "France", Europe, ["culture", "food", "romance", "wine"], N, 50.0, 30.0),
        seed("PT", "Portugal", Europe, ["beach", "surf", "wine", "history"], N, 62.0, 18.0),
        seed("GR", "Greece", Europe, ["beach", "history", "islands", "food"], N, 65.0, 25.0),
        seed("TH", "Thailand", Asia, ["beach", "temples", "food", "budget"], N, 82.0, 8.0),
        seed("JP", "Japan", Asia, ["culture", "food", "temples", "modern"], N, 55.0, 35.0),
        seed("VN", "Vietnam", Asia, ["food", "history", "budget", "nature"], N, 78.0, 12.0),
        seed("ID", "Indonesia", Asia, ["beach", "surf", "temples", "nature"], S, 82.0, 5.0),
        seed("AU", "Australia", Oceania, ["beach", "nature", "adventure", "wildlife"], S, 72.0, 20.0),
        seed("NZ", "New Zealand", Oceania, ["nature", "adventure", "film", "hiking"], S, 58.0, 18.0),
        seed("MX", "Mexico", Americas, ["beach", "culture", "food", "history"], N, 75.0, 12.0),
        seed("BR", "Brazil", Americas, ["beach", "carnival", "nature", "adventure"], S, 78.0, 15.0),
        seed("AR", "Argentina", Americas, ["wine", "tango", "steak", "nature"], S, 62.0, 22.0),
        seed("CO", "Colombia", Americas, ["coffee", "salsa", "nature", "culture"], N, 72.0, 5.0),
        seed("PE", "Peru", Americas, ["history", "food", "nature", "adventure"], S, 65.0, 12.0),
        seed("MA", "Morocco", Africa, ["culture", "desert", "food", "markets"], N, 68.0, 22.0),
        seed("ZA", "South Africa", Africa, ["wildlife", "wine", "nature", "adventure"], S, 68.0, 18.0),
        seed("EG", "Egypt", Africa, ["history", "pyramids", "desert", "diving"], N, 75.0, 25.0),
        seed("KE", "Kenya", Africa, ["safari", "wildlife", "nature", "beach"], S, 72.0, 8.0),
        seed("AE", "UAE", MiddleEast, ["luxury", "modern", "shopping", "desert"], N, 85.0, 22.0),
        seed("TR", "Turkey", MiddleEast, ["culture", "food", "history", "beach"], N, 58.0, 30.0),
        seed("HR", "Croatia", Europe, ["beach", "islands", "history", "sailing"], N, 55.0, 28.0),
        seed("IS", "Iceland", Europe, ["nature", "adventure", "northern-lights", "hiking"], N, 38.0, 18.0),
    ]
}

/// Notable places. Spain gets a complete set; other countries one or two.
fn reference_places() -> Vec<NewPlace> {
    let p = NewPlace::new;
    vec![
        p("ES", "La Sagrada Familia", "landmark", "Gaudí's unfinished masterpiece basilica in Barcelona"),
        p("ES", "Alhambra", "landmark", "Stunning Moorish palace complex in Granada"),
        p("ES", "Park Güell", "park", "Colorful Gaudí-designed public park in Barcelona"),
        p("ES", "Prado Museum", "museum", "World-class art museum in Madrid"),
        p("ES", "Plaza Mayor", "square", "Historic central square in Madrid"),
        p("ES", "La Rambla", "street", "Famous tree-lined pedestrian street in Barcelona"),
        p("ES", "Ibiza Old Town", "neighborhood", "UNESCO World Heritage walled city"),
        p("IT", "Colosseum", "landmark", "Ancient Roman amphitheater in Rome"),
        p("IT", "Venice Canals", "attraction", "Iconic waterways of Venice"),
        p("FR", "Eiffel Tower", "landmark", "Iconic iron lattice tower in Paris"),
        p("FR", "Louvre Museum", "museum", "World's largest art museum"),
        p("PT", "Belém Tower", "landmark", "16th-century fortified tower in Lisbon"),
        p("GR", "Acropolis", "landmark", "Ancient citadel above Athens"),
        p("TH", "Grand Palace", "landmark", "Royal palace complex in Bangkok"),
        p("TH", "Phi Phi Islands", "beach", "Stunning island archipelago"),
        p("JP", "Fushimi Inari Shrine", "temple", "Famous shrine with thousands of torii gates"),
        p("JP", "Mount Fuji", "nature", "Japan's iconic sacred mountain"),
        p("VN", "Ha Long Bay", "nature", "UNESCO World Heritage seascape"),
        p("ID", "Bali Beaches", "beach", "World-famous tropical beaches"),
        p("AU", "Sydney Opera House", "landmark", "Iconic performing arts venue"),
        p("AU", "Great Barrier Reef", "nature", "World's largest coral reef system"),
        p("NZ", "Milford Sound", "nature", "Stunning fiord in South Island"),
        p("MX", "Chichen Itza", "landmark", "Ancient Mayan pyramid complex"),
        p("MX", "Cancun Beaches", "beach", "Caribbean beach paradise"),
        p("BR", "Christ the Redeemer", "landmark", "Iconic statue overlooking Rio"),
        p("AR", "Iguazu Falls", "nature", "Spectacular waterfall system"),
        p("CO", "Cartagena Old Town", "neighborhood", "Colonial walled city on the coast"),
        p("PE", "Machu Picchu", "landmark", "Ancient Incan citadel"),
        p("MA", "Jemaa el-Fnaa", "square", "Vibrant main square in Marrakech"),
        p("ZA", "Table Mountain", "nature", "Iconic flat-topped mountain in Cape Town"),
        p("EG", "Pyramids of Giza", "landmark", "Ancient wonder of the world"),
        p("KE", "Maasai Mara", "nature", "Famous safari reserve"),
        p("AE", "Burj Khalifa", "landmark", "World's tallest building in Dubai"),
        p("TR", "Hagia Sophia", "landmark", "Historic mosque in Istanbul"),
        p("HR", "Dubrovnik Old Town", "neighborhood", "Medieval walled city on the Adriatic"),
        p("IS", "Blue Lagoon", "attraction", "Geothermal spa near Reykjavik"),
    ]
}
