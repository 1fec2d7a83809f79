//! Conversion of raw Open-Meteo daily arrays into [`Forecast`] values.

use chrono::{Datelike, NaiveDate};

use crate::{
    conditions::{UNKNOWN_CONDITION, condition_label},
    error::ForecastError,
    model::{DayForecast, FORECAST_DAYS, Forecast, RawProviderResponse},
    registry::Location,
};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// NWS Rothfusz regression coefficients. They are fitted for Fahrenheit but are
// applied to the provider's Celsius values unchanged.
const C1: f64 = -42.379;
const C2: f64 = 2.04901523;
const C3: f64 = 10.14333127;
const C4: f64 = -0.22475541;
const C5: f64 = -0.00683783;
const C6: f64 = -0.05481717;
const C7: f64 = 0.00122874;
const C8: f64 = 0.00085282;
const C9: f64 = -0.00000199;

/// Short weekday name, Sunday first.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Unrounded heat index polynomial.
pub fn heat_index_raw(t: f64, rh: f64) -> f64 {
    C1 + C2 * t
        + C3 * rh
        + C4 * t * rh
        + C5 * t * t
        + C6 * rh * rh
        + C7 * t * t * rh
        + C8 * t * rh * rh
        + C9 * t * t * rh * rh
}

/// Heat index rounded to the nearest integer (half away from zero).
pub fn heat_index(t: f64, rh: f64) -> i32 {
    heat_index_raw(t, rh).round() as i32
}

/// Build a [`Forecast`] for `location` from a raw provider payload.
pub fn normalize(
    raw: &RawProviderResponse,
    location: &Location,
) -> Result<Forecast, ForecastError> {
    let daily = raw
        .daily
        .as_ref()
        .ok_or_else(|| malformed("missing `daily` block"))?;

    let time = daily.time.as_deref().ok_or_else(|| missing("time"))?;
    if time.len() != FORECAST_DAYS {
        return Err(malformed(format!(
            "expected {FORECAST_DAYS} days in `time`, got {}",
            time.len()
        )));
    }

    let max = column(&daily.temperature_2m_max, "temperature_2m_max")?;
    let min = column(&daily.temperature_2m_min, "temperature_2m_min")?;
    let precip = column(&daily.precipitation_sum, "precipitation_sum")?;
    let rain_chance = column(
        &daily.precipitation_probability_max,
        "precipitation_probability_max",
    )?;
    let wind = column(&daily.windspeed_10m_max, "windspeed_10m_max")?;
    let humidity = column(&daily.relative_humidity_2m_max, "relative_humidity_2m_max")?;
    let codes = column(&daily.weathercode, "weathercode")?;

    let mut days = Vec::with_capacity(FORECAST_DAYS);
    for (i, date_str) in time.iter().enumerate() {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|e| malformed(format!("invalid date '{date_str}': {e}")))?;

        let max_temp = max[i].unwrap_or(0.0);
        let rh = humidity[i].unwrap_or(0.0);

        days.push(DayForecast {
            date,
            day_name: day_name(date).to_string(),
            temperature: max_temp.round() as i32,
            min_temperature: min[i].unwrap_or(0.0).round() as i32,
            chance_of_rain: percent(rain_chance[i]),
            precipitation: precip[i].unwrap_or(0.0).max(0.0),
            humidity: percent(humidity[i]),
            wind_speed: wind[i].unwrap_or(0.0).round().max(0.0) as u32,
            weather: codes[i]
                .map_or(UNKNOWN_CONDITION, condition_label)
                .to_string(),
            heat_index: heat_index(max_temp, rh),
        });
    }

    Ok(Forecast {
        name: location.name.clone(),
        latitude: location.latitude,
        longitude: location.longitude,
        current: days[0].clone(),
        forecast: days,
    })
}

fn column<'a, T>(
    values: &'a Option<Vec<Option<T>>>,
    field: &str,
) -> Result<&'a [Option<T>], ForecastError> {
    let values = values.as_deref().ok_or_else(|| missing(field))?;
    if values.len() != FORECAST_DAYS {
        return Err(malformed(format!(
            "expected {FORECAST_DAYS} values in `{field}`, got {}",
            values.len()
        )));
    }
    Ok(values)
}

fn percent(value: Option<f64>) -> u8 {
    value.unwrap_or(0.0).round().clamp(0.0, 100.0) as u8
}

fn missing(field: &str) -> ForecastError {
    malformed(format!("missing `{field}` array"))
}

fn malformed(msg: impl Into<String>) -> ForecastError {
    ForecastError::MalformedResponse(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawDaily;

    fn isabela() -> Location {
        Location::new("isabela", "Isabela", 10.7034, 122.0819)
    }

    fn week_of_raw() -> RawProviderResponse {
        let dates = [
            "2024-01-07",
            "2024-01-08",
            "2024-01-09",
            "2024-01-10",
            "2024-01-11",
            "2024-01-12",
            "2024-01-13",
        ];
        let some = |v: [f64; 7]| Some(v.iter().copied().map(Some).collect::<Vec<_>>());

        RawProviderResponse {
            daily: Some(RawDaily {
                time: Some(dates.iter().map(|d| d.to_string()).collect()),
                temperature_2m_max: some([31.6, 30.2, 29.5, 28.4, 32.0, 30.0, 29.9]),
                temperature_2m_min: some([24.4, 24.5, 23.2, 22.9, 25.0, 24.0, 23.6]),
                precipitation_sum: some([0.0, 1.2, 5.4, 0.3, 0.0, 2.0, 0.0]),
                precipitation_probability_max: some([10.0, 35.0, 80.0, 20.0, 5.0, 50.0, 15.0]),
                windspeed_10m_max: some([11.4, 12.5, 18.9, 9.0, 7.2, 14.6, 10.1]),
                relative_humidity_2m_max: some([75.0, 82.0, 90.0, 70.0, 70.0, 85.0, 78.0]),
                weathercode: Some(vec![
                    Some(2),
                    Some(61),
                    Some(95),
                    Some(3),
                    Some(0),
                    Some(80),
                    Some(1),
                ]),
            }),
        }
    }

    fn daily_mut(raw: &mut RawProviderResponse) -> &mut RawDaily {
        raw.daily.as_mut().unwrap()
    }

    #[test]
    fn heat_index_matches_polynomial_spot_values() {
        assert_eq!(heat_index(32.0, 70.0), 166);
        assert_eq!(heat_index(25.0, 50.0), 182);
        assert_eq!(heat_index(30.0, 65.0), 175);
        assert_eq!(heat_index(28.0, 80.0), 187);
        assert_eq!(heat_index(35.0, 40.0), 128);
        assert_eq!(heat_index(0.0, 0.0), -42);
    }

    #[test]
    fn heat_index_raw_is_unrounded() {
        assert!((heat_index_raw(32.0, 70.0) - 165.97772214).abs() < 1e-6);
        assert!((heat_index_raw(25.0, 50.0) - 182.342113).abs() < 1e-6);
        assert!((heat_index_raw(0.0, 0.0) - C1).abs() < f64::EPSILON);
    }

    #[test]
    fn day_name_starts_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(day_name(sunday), "Sun");
        assert_eq!(day_name(sunday.succ_opt().unwrap()), "Mon");
        assert_eq!(day_name(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()), "Sat");
    }

    #[test]
    fn normalize_well_formed_week() {
        let forecast = normalize(&week_of_raw(), &isabela()).expect("well-formed payload");

        assert_eq!(forecast.name, "Isabela");
        assert_eq!(forecast.latitude, 10.7034);
        assert_eq!(forecast.longitude, 122.0819);
        assert_eq!(forecast.forecast.len(), 7);
        assert_eq!(forecast.current, forecast.forecast[0]);

        let today = &forecast.current;
        assert_eq!(today.date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_eq!(today.day_name, "Sun");
        assert_eq!(today.temperature, 32);
        assert_eq!(today.min_temperature, 24);
        assert_eq!(today.chance_of_rain, 10);
        assert_eq!(today.precipitation, 0.0);
        assert_eq!(today.humidity, 75);
        assert_eq!(today.wind_speed, 11);
        assert_eq!(today.weather, "Partly Cloudy");
        // Computed from the unrounded 31.6, not from 32.
        assert_eq!(today.heat_index, 168);

        let day_names: Vec<&str> = forecast.forecast.iter().map(|d| d.day_name.as_str()).collect();
        assert_eq!(day_names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

        assert_eq!(forecast.forecast[1].precipitation, 1.2);
        assert_eq!(forecast.forecast[2].weather, "Thunderstorm");
        assert_eq!(forecast.forecast[2].wind_speed, 19);
    }

    #[test]
    fn normalize_defaults_absent_values_to_zero() {
        let mut raw = week_of_raw();
        let daily = daily_mut(&mut raw);
        daily.precipitation_probability_max.as_mut().unwrap()[3] = None;
        daily.precipitation_sum.as_mut().unwrap()[3] = None;
        daily.relative_humidity_2m_max.as_mut().unwrap()[3] = None;
        daily.windspeed_10m_max.as_mut().unwrap()[3] = None;

        let forecast = normalize(&raw, &isabela()).unwrap();
        let day = &forecast.forecast[3];

        assert_eq!(day.chance_of_rain, 0);
        assert_eq!(day.precipitation, 0.0);
        assert_eq!(day.humidity, 0);
        assert_eq!(day.wind_speed, 0);
        // humidity defaults to 0 for the heat index too
        assert_eq!(day.heat_index, heat_index(28.4, 0.0));
    }

    #[test]
    fn normalize_maps_missing_or_unknown_codes_to_unknown() {
        let mut raw = week_of_raw();
        let codes = daily_mut(&mut raw).weathercode.as_mut().unwrap();
        codes[4] = None;
        codes[5] = Some(42);

        let forecast = normalize(&raw, &isabela()).unwrap();
        assert_eq!(forecast.forecast[4].weather, "Unknown");
        assert_eq!(forecast.forecast[5].weather, "Unknown");
    }

    #[test]
    fn normalize_rejects_wrong_day_count() {
        let mut raw = week_of_raw();
        daily_mut(&mut raw).time.as_mut().unwrap().pop();

        let err = normalize(&raw, &isabela()).unwrap_err();
        assert!(matches!(err, ForecastError::MalformedResponse(_)));
    }

    #[test]
    fn normalize_rejects_missing_array() {
        let mut raw = week_of_raw();
        daily_mut(&mut raw).relative_humidity_2m_max = None;

        let err = normalize(&raw, &isabela()).unwrap_err();
        assert!(err.to_string().contains("relative_humidity_2m_max"));
    }

    #[test]
    fn normalize_rejects_short_parallel_array() {
        let mut raw = week_of_raw();
        daily_mut(&mut raw).weathercode.as_mut().unwrap().truncate(5);

        let err = normalize(&raw, &isabela()).unwrap_err();
        assert!(matches!(err, ForecastError::MalformedResponse(_)));
    }

    #[test]
    fn normalize_rejects_missing_daily_block() {
        let err = normalize(&RawProviderResponse::default(), &isabela()).unwrap_err();
        assert!(matches!(err, ForecastError::MalformedResponse(_)));
    }

    #[test]
    fn normalize_rejects_bad_date() {
        let mut raw = week_of_raw();
        daily_mut(&mut raw).time.as_mut().unwrap()[0] = "07/01/2024".into();

        let err = normalize(&raw, &isabela()).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }
}
