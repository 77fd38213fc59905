//! Temperature unit conversion.
//!
//! Climate rows store Fahrenheit; the UI and email digests display Celsius.

/// Convert Fahrenheit to Celsius, rounded to the nearest degree.
pub fn f_to_c(f: f64) -> i32 {
    ((f - 32.0) * (5.0 / 9.0)).round() as i32
}

/// Format a Fahrenheit range as a Celsius string like "15–25°C".
pub fn format_temp_range_c(min_f: i32, max_f: i32) -> String {
    format!("{}–{}°C", f_to_c(min_f as f64), f_to_c(max_f as f64))
}

/// Format a single Fahrenheit temperature as Celsius.
pub fn format_temp_c(f: i32) -> String {
    format!("{}°C", f_to_c(f as f64))
}
