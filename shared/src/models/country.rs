//! Country models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::Hemisphere;

/// Error for enum fields stored as strings
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}

/// World region a country belongs to. Rainfall patterns are keyed on this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Europe,
    Asia,
    Oceania,
    Americas,
    Africa,
    #[serde(rename = "Middle East")]
    MiddleEast,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::Americas => "Americas",
            Region::Africa => "Africa",
            Region::MiddleEast => "Middle East",
        }
    }

    pub const ALL: [Region; 6] = [
        Region::Europe,
        Region::Asia,
        Region::Oceania,
        Region::Americas,
        Region::Africa,
        Region::MiddleEast,
    ];
}

impl FromStr for Region {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Europe" => Ok(Region::Europe),
            "Asia" => Ok(Region::Asia),
            "Oceania" => Ok(Region::Oceania),
            "Americas" => Ok(Region::Americas),
            "Africa" => Ok(Region::Africa),
            "Middle East" => Ok(Region::MiddleEast),
            _ => Err(InvalidEnumValue {
                kind: "region",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country as persisted and served. Seed-time climate attributes live on
/// [`CountrySeed`], not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// ISO-2 code, uppercase, primary key
    pub code: String,
    pub name: String,
    pub region: Region,
    pub tags: Vec<String>,
}

/// Seed profile for a country: the persisted entity plus the climate model
/// inputs consumed only by the synthesis batch job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySeed {
    pub code: String,
    pub name: String,
    pub region: Region,
    pub tags: Vec<String>,
    pub hemisphere: Hemisphere,
    /// Annual mean temperature in °F
    pub base_temp_f: f64,
    /// Amplitude (°F) of the annual temperature swing
    pub seasonality_f: f64,
}

impl CountrySeed {
    /// The persisted entity portion of this seed profile.
    pub fn country(&self) -> Country {
        Country {
            code: self.code.clone(),
            name: self.name.clone(),
            region: self.region,
            tags: self.tags.clone(),
        }
    }
}
