use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of daily records requested from the provider and carried by a [`Forecast`].
pub const FORECAST_DAYS: usize = 7;

/// One day of display-ready forecast data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    pub date: NaiveDate,
    pub day_name: String,
    pub temperature: i32,
    pub min_temperature: i32,
    pub chance_of_rain: u8,
    pub precipitation: f64,
    pub humidity: u8,
    pub wind_speed: u32,
    pub weather: String,
    pub heat_index: i32,
}

/// Normalized seven-day forecast for one location.
///
/// `current` is always a copy of `forecast[0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub current: DayForecast,
    pub forecast: Vec<DayForecast>,
}

/// Top-level Open-Meteo payload. Only the `daily` block is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProviderResponse {
    pub daily: Option<RawDaily>,
}

/// Parallel per-day arrays as returned by the provider.
///
/// The outer `Option` tracks whether an array was sent at all, the inner one
/// whether a particular day carried a value (`null` in JSON).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    pub time: Option<Vec<String>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    pub windspeed_10m_max: Option<Vec<Option<f64>>>,
    pub relative_humidity_2m_max: Option<Vec<Option<f64>>>,
    pub weathercode: Option<Vec<Option<i32>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_forecast_serializes_with_camel_case_keys() {
        let day = DayForecast {
            date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            day_name: "Sun".into(),
            temperature: 30,
            min_temperature: 24,
            chance_of_rain: 40,
            precipitation: 1.5,
            humidity: 80,
            wind_speed: 12,
            weather: "Cloudy".into(),
            heat_index: 170,
        };

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2024-01-07");
        assert_eq!(json["dayName"], "Sun");
        assert_eq!(json["minTemperature"], 24);
        assert_eq!(json["chanceOfRain"], 40);
        assert_eq!(json["windSpeed"], 12);
        assert_eq!(json["heatIndex"], 170);
    }

    #[test]
    fn raw_daily_keeps_null_elements_apart_from_missing_arrays() {
        let raw: RawProviderResponse = serde_json::from_str(
            r#"{"daily": {"time": ["2024-01-07"], "precipitation_sum": [null]}}"#,
        )
        .unwrap();

        let daily = raw.daily.unwrap();
        assert_eq!(daily.precipitation_sum, Some(vec![None]));
        assert!(daily.weathercode.is_none());
    }
}
