//! Climate synthesis: derives the 12 monthly climate rows for each seed
//! country from its base temperature, seasonality, hemisphere, and region.
//!
//! Runs offline as a batch step; the pattern tables are immutable
//! configuration injected by the caller, not module state.

use std::collections::HashMap;

use crate::models::climate::{calc_score, calc_temp, BudgetTier, CrowdLevel, MonthlyClimate};
use crate::models::country::{CountrySeed, Region};
use crate::types::Hemisphere;

/// Synthesized rainfall never drops below this
pub const MIN_RAIN_MM: i32 = 5;

use BudgetTier::{Budget as B1, Moderate as B2, Premium as B3};
use CrowdLevel::{High, Low, Medium};

/// Fixed lookup tables consumed by the synthesis step: monthly rainfall
/// base values per region, crowd/budget cycles per hemisphere, and the
/// country-independent month highlights.
#[derive(Debug, Clone)]
pub struct ClimatePatterns {
    rainfall: HashMap<Region, [f64; 12]>,
    crowds_north: [CrowdLevel; 12],
    crowds_south: [CrowdLevel; 12],
    budgets_north: [BudgetTier; 12],
    budgets_south: [BudgetTier; 12],
    highlights: [[&'static str; 3]; 12],
}

impl ClimatePatterns {
    /// The reference pattern set the production data is generated from.
    pub fn reference() -> Self {
        let rainfall = HashMap::from([
            (
                Region::Europe,
                [
                    60.0, 50.0, 55.0, 50.0, 55.0, 45.0, 30.0, 35.0, 50.0, 70.0, 75.0, 70.0,
                ],
            ),
            (
                Region::Asia,
                [
                    20.0, 25.0, 40.0, 80.0, 150.0, 180.0, 200.0, 190.0, 150.0, 100.0, 50.0, 25.0,
                ],
            ),
            (
                Region::Oceania,
                [
                    80.0, 90.0, 70.0, 60.0, 70.0, 80.0, 70.0, 60.0, 60.0, 70.0, 70.0, 80.0,
                ],
            ),
            (
                Region::Americas,
                [
                    40.0, 35.0, 45.0, 60.0, 90.0, 120.0, 150.0, 140.0, 120.0, 80.0, 50.0, 40.0,
                ],
            ),
            (
                Region::Africa,
                [
                    30.0, 35.0, 50.0, 70.0, 40.0, 20.0, 10.0, 15.0, 25.0, 40.0, 50.0, 35.0,
                ],
            ),
            (
                Region::MiddleEast,
                [
                    25.0, 30.0, 25.0, 15.0, 5.0, 0.0, 0.0, 0.0, 5.0, 15.0, 25.0, 30.0,
                ],
            ),
        ]);

        // Tourism peaks in the local summer; budgets follow the crowds.
        let crowds_north = [
            Low, Low, Medium, Medium, High, High, High, High, Medium, Medium, Low, Medium,
        ];
        let crowds_south = [
            High, High, Medium, Medium, Low, Low, Low, Low, Medium, Medium, High, High,
        ];
        let budgets_north = [B1, B1, B2, B2, B3, B3, B3, B3, B2, B2, B1, B2];
        let budgets_south = [B3, B3, B2, B2, B1, B1, B1, B1, B2, B2, B3, B3];

        let highlights = [
            ["New Year celebrations", "Winter escapes", "Off-peak deals"],
            ["Valentine's retreats", "Carnival season", "Shoulder season"],
            ["Spring awakening", "Cherry blossoms", "Pre-summer prices"],
            ["Easter holidays", "Spring festivals", "Pleasant weather"],
            ["Late spring bloom", "Outdoor activities", "Before summer crowds"],
            ["Summer begins", "Long sunny days", "Festival season"],
            ["Peak summer", "Beach weather", "Outdoor adventures"],
            ["High season", "Perfect for swimming", "Cultural festivals"],
            ["Harvest season", "Mild temperatures", "Wine festivals"],
            ["Autumn colors", "Halloween events", "Shoulder season"],
            ["Pre-winter calm", "Off-peak travel", "Local experiences"],
            ["Holiday magic", "Christmas markets", "Winter wonderland"],
        ];

        Self {
            rainfall,
            crowds_north,
            crowds_south,
            budgets_north,
            budgets_south,
            highlights,
        }
    }

    /// Base rainfall (mm) for a region and month. Unknown regions fall back
    /// to the Europe curve.
    pub fn rain_base(&self, region: Region, month: u32) -> f64 {
        let pattern = self
            .rainfall
            .get(&region)
            .or_else(|| self.rainfall.get(&Region::Europe));
        pattern.map_or(0.0, |p| p[month_index(month)])
    }

    pub fn crowd_level(&self, hemisphere: Hemisphere, month: u32) -> CrowdLevel {
        match hemisphere {
            Hemisphere::North => self.crowds_north[month_index(month)],
            Hemisphere::South => self.crowds_south[month_index(month)],
        }
    }

    pub fn budget_tier(&self, hemisphere: Hemisphere, month: u32) -> BudgetTier {
        match hemisphere {
            Hemisphere::North => self.budgets_north[month_index(month)],
            Hemisphere::South => self.budgets_south[month_index(month)],
        }
    }

    /// Highlight strings for a month. Identical across countries.
    pub fn highlights(&self, month: u32) -> Vec<String> {
        self.highlights[month_index(month)]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

fn month_index(month: u32) -> usize {
    (month as usize).saturating_sub(1).min(11)
}

/// Generate all 12 monthly climate rows for every seed country.
/// Deterministic: identical seeds and patterns always produce identical
/// rows, which is what makes re-seeding an idempotent upsert.
pub fn generate_climate_data(
    seeds: &[CountrySeed],
    patterns: &ClimatePatterns,
) -> Vec<MonthlyClimate> {
    let mut climates = Vec::with_capacity(seeds.len() * 12);
    for seed in seeds {
        for month in 1..=12 {
            climates.push(synthesize_month(seed, month, patterns));
        }
    }
    climates
}

/// Synthesize a single country-month climate row.
pub fn synthesize_month(
    seed: &CountrySeed,
    month: u32,
    patterns: &ClimatePatterns,
) -> MonthlyClimate {
    let temps = calc_temp(seed.base_temp_f, seed.seasonality_f, month, seed.hemisphere);
    let rain_mm = perturbed_rainfall(patterns.rain_base(seed.region, month), &seed.code);
    let crowd_level = patterns.crowd_level(seed.hemisphere, month);
    let budget_tier = patterns.budget_tier(seed.hemisphere, month);
    let score = calc_score(temps.max_f, rain_mm, crowd_level);

    MonthlyClimate {
        country_code: seed.code.clone(),
        month,
        score,
        temp_min_f: temps.min_f,
        temp_max_f: temps.max_f,
        rain_mm,
        crowd_level,
        budget_tier,
        highlights: patterns.highlights(month),
    }
}

/// Rainfall with a deterministic per-country multiplier in [0.4, 1.2],
/// derived from the first byte of the country code. Two countries in the
/// same region get distinct curves without any true randomness; the same
/// code always yields the same output. Floored at [`MIN_RAIN_MM`].
fn perturbed_rainfall(base_mm: f64, code: &str) -> i32 {
    let seed_byte = code.as_bytes().first().copied().unwrap_or(b'A');
    let multiplier = 0.8 + f64::from(seed_byte).sin() * 0.4;
    ((base_mm * multiplier).round() as i32).max(MIN_RAIN_MM)
}
