//! Notable places shown on country detail pages

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A landmark, neighborhood, or attraction within a country.
/// Places carry no stable natural key; re-seeding replaces them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub country_code: String,
    pub name: String,
    pub place_type: String,
    pub short_description: String,
}

/// Place payload before insertion assigns an id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlace {
    pub country_code: String,
    pub name: String,
    pub place_type: String,
    pub short_description: String,
}

impl NewPlace {
    pub fn new(
        country_code: &str,
        name: &str,
        place_type: &str,
        short_description: &str,
    ) -> Self {
        Self {
            country_code: country_code.to_string(),
            name: name.to_string(),
            place_type: place_type.to_string(),
            short_description: short_description.to_string(),
        }
    }
}
