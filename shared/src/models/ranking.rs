//! Best/avoid month ranking over a country's climate rows

use serde::{Deserialize, Serialize};

use crate::models::climate::{CrowdLevel, MonthlyClimate};
use crate::types::month_name;
use crate::units::f_to_c;

/// Months below this score qualify for the avoid list. A locally-worst
/// month above it is simply not surfaced.
pub const AVOID_SCORE_THRESHOLD: i32 = 70;

/// One ranked month with its human-readable justification. Derived on
/// demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthRanking {
    pub month: u32,
    pub month_name: String,
    pub score: i32,
    pub reason: String,
}

/// Result of ranking a country's months
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestMonths {
    /// Up to 3 months, best first
    pub best: Vec<MonthRanking>,
    /// Up to 2 months scoring below [`AVOID_SCORE_THRESHOLD`]
    pub avoid: Vec<MonthRanking>,
}

/// Rank a country's months into best and avoid lists.
///
/// Returns `None` for an empty slice, which callers treat as "no data"
/// rather than a failure. The input is expected month-ascending; the sort
/// is stable, so tied scores keep that order.
pub fn rank_months(climates: &[MonthlyClimate]) -> Option<BestMonths> {
    if climates.is_empty() {
        return None;
    }

    let mut sorted: Vec<&MonthlyClimate> = climates.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let best = sorted
        .iter()
        .take(3)
        .map(|c| ranking_entry(c, true))
        .collect();

    // Bottom two by score, surfaced only if actually problematic.
    let avoid = sorted[sorted.len().saturating_sub(2)..]
        .iter()
        .filter(|c| c.score < AVOID_SCORE_THRESHOLD)
        .map(|c| ranking_entry(c, false))
        .collect();

    Some(BestMonths { best, avoid })
}

fn ranking_entry(climate: &MonthlyClimate, is_good: bool) -> MonthRanking {
    MonthRanking {
        month: climate.month,
        month_name: month_name(climate.month).to_string(),
        score: climate.score,
        reason: generate_reason(climate, is_good),
    }
}

/// Generate a calm, descriptive reason for why a month is good or bad to
/// visit. Pure function; the categories overlap, so the first matching
/// rule wins and the order of checks is load-bearing.
pub fn generate_reason(climate: &MonthlyClimate, is_good: bool) -> String {
    let avg_temp_c = f_to_c(f64::from(climate.temp_min_f + climate.temp_max_f) / 2.0);
    let is_warm = avg_temp_c > 20;
    let is_cold = avg_temp_c < 10;
    let is_mild = (10..=20).contains(&avg_temp_c);
    let is_rainy = climate.rain_mm > 100;
    let is_dry = climate.rain_mm < 50;
    let is_crowded = climate.crowd_level == CrowdLevel::High;
    let is_quiet = climate.crowd_level == CrowdLevel::Low;

    let reason = if is_good {
        if is_mild && is_dry && is_quiet {
            "Pleasant temperatures, low rainfall, and fewer crowds."
        } else if is_warm && is_dry {
            "Warm and dry—ideal conditions for exploring."
        } else if is_mild && is_quiet {
            "Comfortable weather with a peaceful atmosphere."
        } else if is_dry && is_quiet {
            "Dry season with minimal tourist crowds."
        } else if is_warm {
            "Warm weather perfect for outdoor activities."
        } else {
            "Favorable conditions for travel."
        }
    } else if is_rainy && is_crowded {
        "Peak rainfall and high tourist density."
    } else if is_rainy {
        "Expect significant rainfall during this period."
    } else if is_crowded && is_warm {
        "Peak season—expect crowds and higher prices."
    } else if is_cold {
        "Cold temperatures may limit outdoor activities."
    } else if is_crowded {
        "High tourist season with elevated prices."
    } else {
        "Less favorable conditions for travel."
    };

    reason.to_string()
}
