//! Monthly climate records and the pure scoring/temperature model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::country::InvalidEnumValue;
use crate::types::Hemisphere;

/// Lower bound of the travel score range
pub const SCORE_MIN: i32 = 40;
/// Upper bound of the travel score range
pub const SCORE_MAX: i32 = 98;

/// Tourism density for a hemisphere and month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "low",
            CrowdLevel::Medium => "medium",
            CrowdLevel::High => "high",
        }
    }
}

impl FromStr for CrowdLevel {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(CrowdLevel::Low),
            "medium" => Ok(CrowdLevel::Medium),
            "high" => Ok(CrowdLevel::High),
            _ => Err(InvalidEnumValue {
                kind: "crowd level",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost indicator for a hemisphere and month, displayed as "$".."$$$"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "$",
            BudgetTier::Moderate => "$$",
            BudgetTier::Premium => "$$$",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(BudgetTier::Budget),
            "$$" => Ok(BudgetTier::Moderate),
            "$$$" => Ok(BudgetTier::Premium),
            _ => Err(InvalidEnumValue {
                kind: "budget tier",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Climate record for one country and one calendar month.
/// Exactly 12 rows exist per fully-seeded country, keyed on
/// `(country_code, month)`. Read-only at request time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyClimate {
    pub country_code: String,
    /// Calendar month, 1..=12
    pub month: u32,
    /// Travel score in [SCORE_MIN, SCORE_MAX]
    pub score: i32,
    pub temp_min_f: i32,
    pub temp_max_f: i32,
    /// Monthly rainfall, floored at 5mm
    pub rain_mm: i32,
    pub crowd_level: CrowdLevel,
    pub budget_tier: BudgetTier,
    pub highlights: Vec<String>,
}

/// Monthly temperature range in °F
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TempRange {
    pub min_f: i32,
    pub max_f: i32,
}

/// Derive a month's temperature range from a country's base temperature and
/// seasonality amplitude.
///
/// The distance from the warmest month is deliberately not wrapped across
/// the year boundary: against a July peak, December sits 5 months away but
/// January 6, so the curve is discontinuous between the two. Stored data
/// was generated with this behavior; keep it.
pub fn calc_temp(
    base_temp_f: f64,
    seasonality_f: f64,
    month: u32,
    hemisphere: Hemisphere,
) -> TempRange {
    let peak_month = hemisphere.peak_month();
    let month_offset = (month as i32 - peak_month as i32).abs() as f64;
    let season_factor = (month_offset / 6.0 * std::f64::consts::PI).cos();
    let avg_temp = base_temp_f + seasonality_f * season_factor;

    // Fixed 20°F diurnal spread, asymmetric around the average.
    TempRange {
        min_f: (avg_temp - 12.0).round() as i32,
        max_f: (avg_temp + 8.0).round() as i32,
    }
}

/// Travel score for a month from its max temperature, rainfall, and crowd
/// level. Additive over a base of 70; within each category the first
/// matching band wins. Result is clamped to [SCORE_MIN, SCORE_MAX].
pub fn calc_score(temp_max_f: i32, rain_mm: i32, crowd_level: CrowdLevel) -> i32 {
    let mut score = 70;

    // Temperature factor (ideal: 68-82°F)
    if (68..=82).contains(&temp_max_f) {
        score += 15;
    } else if (60..=90).contains(&temp_max_f) {
        score += 8;
    } else if temp_max_f < 45 || temp_max_f > 95 {
        score -= 10;
    }

    // Rain factor
    if rain_mm < 30 {
        score += 10;
    } else if rain_mm < 60 {
        score += 5;
    } else if rain_mm > 150 {
        score -= 10;
    } else if rain_mm > 100 {
        score -= 5;
    }

    // Crowd factor (lower crowds read slightly better for most travelers)
    match crowd_level {
        CrowdLevel::Low => score += 3,
        CrowdLevel::High => score -= 2,
        CrowdLevel::Medium => {}
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}
