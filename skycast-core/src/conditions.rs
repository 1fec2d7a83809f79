//! Lookup tables shared by the normalizer and the presentation layer.
//!
//! See: https://open-meteo.com/en/docs#weathervariables for the WMO codes.

/// Label used for any weather code outside the table.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Glyph used for any label outside the glyph table.
pub const DEFAULT_GLYPH: &str = "🌤️";

/// Map a WMO weather code to its condition label. Exact match only.
pub fn condition_label(code: i32) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Cloudy",
        45 | 48 => "Foggy",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Dense Drizzle",
        61 => "Slight Rain",
        63 => "Moderate Rain",
        65 => "Heavy Rain",
        71 => "Slight Snow",
        73 => "Moderate Snow",
        75 => "Heavy Snow",
        80 => "Slight Rain Showers",
        81 => "Moderate Rain Showers",
        82 => "Violent Rain Showers",
        85 => "Slight Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with Hail",
        _ => UNKNOWN_CONDITION,
    }
}

/// Map a condition label to the glyph shown next to it.
pub fn condition_glyph(label: &str) -> &'static str {
    match label {
        "Clear" => "☀️",
        "Mostly Clear" => "🌤️",
        "Partly Cloudy" => "⛅",
        "Cloudy" => "☁️",
        "Foggy" => "🌫️",
        "Light Drizzle" => "🌦️",
        "Drizzle" => "🌧️",
        "Dense Drizzle" => "🌧️",
        "Slight Rain" => "🌧️",
        "Moderate Rain" => "🌧️",
        "Heavy Rain" => "⛈️",
        "Slight Snow" => "❄️",
        "Moderate Snow" => "❄️",
        "Heavy Snow" => "❄️",
        "Slight Rain Showers" => "🌦️",
        "Moderate Rain Showers" => "🌧️",
        "Violent Rain Showers" => "⛈️",
        "Slight Snow Showers" => "❄️",
        "Heavy Snow Showers" => "❄️",
        "Thunderstorm" => "⛈️",
        "Thunderstorm with Hail" => "⛈️",
        _ => DEFAULT_GLYPH,
    }
}
