//! WebAssembly module for ZenTrip Atlas
//!
//! Provides client-side computation for:
//! - Travel score calculation
//! - Monthly temperature curves
//! - Best/avoid month ranking over cached climate rows
//! - Celsius display formatting
//! - Offline signup validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a Fahrenheit temperature to rounded Celsius
#[wasm_bindgen]
pub fn fahrenheit_to_celsius(f: f64) -> i32 {
    shared::units::f_to_c(f)
}

/// Format a Fahrenheit range as a Celsius display string like "15–25°C"
#[wasm_bindgen]
pub fn format_temp_range_celsius(min_f: i32, max_f: i32) -> String {
    shared::units::format_temp_range_c(min_f, max_f)
}

/// Calculate the travel score for a month from its max temperature,
/// rainfall, and crowd level ("low" | "medium" | "high")
#[wasm_bindgen]
pub fn calc_travel_score(temp_max_f: i32, rain_mm: i32, crowd_level: &str) -> Result<i32, JsValue> {
    let crowd: CrowdLevel = crowd_level
        .parse()
        .map_err(|e: InvalidEnumValue| JsValue::from_str(&e.to_string()))?;
    Ok(calc_score(temp_max_f, rain_mm, crowd))
}

/// Calculate a month's temperature range for a base temperature,
/// seasonality amplitude, and hemisphere ("N" | "S").
/// Returns `{ min_f, max_f }` as JSON.
#[wasm_bindgen]
pub fn calc_month_temps(
    base_temp_f: f64,
    seasonality_f: f64,
    month: u32,
    hemisphere: &str,
) -> Result<String, JsValue> {
    let hemisphere = match hemisphere {
        "N" => Hemisphere::North,
        "S" => Hemisphere::South,
        other => {
            return Err(JsValue::from_str(&format!(
                "unknown hemisphere value: {other}"
            )))
        }
    };
    validate_month(month).map_err(JsValue::from_str)?;

    let range = calc_temp(base_temp_f, seasonality_f, month, hemisphere);
    serde_json::to_string(&range).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank climate rows (JSON array of MonthlyClimate) into best/avoid lists.
/// Returns the BestMonths JSON, or "null" when the array is empty.
#[wasm_bindgen]
pub fn rank_months_json(climates_json: &str) -> Result<String, JsValue> {
    let climates: Vec<MonthlyClimate> = serde_json::from_str(climates_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid climates JSON: {e}")))?;

    let ranked = rank_months(&climates);
    serde_json::to_string(&ranked).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate the reason text for one climate row (JSON)
#[wasm_bindgen]
pub fn month_reason(climate_json: &str, is_good: bool) -> Result<String, JsValue> {
    let climate: MonthlyClimate = serde_json::from_str(climate_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate JSON: {e}")))?;

    Ok(generate_reason(&climate, is_good))
}

/// Validate an email address for the signup form
#[wasm_bindgen]
pub fn validate_subscriber_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate_json(temp_min_f: i32, temp_max_f: i32, rain_mm: i32, crowd: &str) -> String {
        format!(
            r#"{{"country_code":"ES","month":7,"score":90,"temp_min_f":{temp_min_f},
               "temp_max_f":{temp_max_f},"rain_mm":{rain_mm},"crowd_level":"{crowd}",
               "budget_tier":"$$","highlights":[]}}"#
        )
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100);
        assert_eq!(fahrenheit_to_celsius(68.0), 20);
    }

    #[test]
    fn test_calc_travel_score() {
        assert_eq!(calc_travel_score(75, 20, "low").unwrap(), 98);
        assert_eq!(calc_travel_score(100, 200, "high").unwrap(), 48);
        assert!(calc_travel_score(75, 20, "packed").is_err());
    }

    #[test]
    fn test_calc_month_temps() {
        let json = calc_month_temps(60.0, 25.0, 7, "N").unwrap();
        let range: TempRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range.min_f, 73);
        assert_eq!(range.max_f, 93);
    }

    #[test]
    fn test_rank_months_empty_is_null() {
        assert_eq!(rank_months_json("[]").unwrap(), "null");
    }

    #[test]
    fn test_month_reason() {
        let reason = month_reason(&climate_json(70, 90, 20, "low"), true).unwrap();
        assert_eq!(reason, "Warm and dry—ideal conditions for exploring.");
    }

    #[test]
    fn test_validate_subscriber_email() {
        assert!(validate_subscriber_email("traveler@example.com"));
        assert!(!validate_subscriber_email("not-an-email"));
    }
}
