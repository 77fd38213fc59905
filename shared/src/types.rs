//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Hemisphere of a destination. Determines which calendar month is
/// climatologically warmest (July in the north, January in the south).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
}

impl Hemisphere {
    pub fn code(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
        }
    }

    /// Warmest calendar month for this hemisphere.
    pub fn peak_month(&self) -> u32 {
        match self {
            Hemisphere::North => 7,
            Hemisphere::South => 1,
        }
    }
}

/// English month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-based month number, clamped into the calendar range.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize).saturating_sub(1).min(11)]
}
