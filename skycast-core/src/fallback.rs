//! Canned forecast served when live data cannot be obtained.
//!
//! The same week of values is used for every location; only the name and
//! coordinates are taken from the requested [`Location`].

use chrono::{Days, NaiveDate};

use crate::{
    model::{DayForecast, Forecast},
    normalize::day_name,
    registry::Location,
};

struct CannedDay {
    temperature: i32,
    min_temperature: i32,
    chance_of_rain: u8,
    precipitation: f64,
    humidity: u8,
    wind_speed: u32,
    weather: &'static str,
    heat_index: i32,
}

const CANNED_WEEK: [CannedDay; 7] = [
    CannedDay {
        temperature: 28,
        min_temperature: 24,
        chance_of_rain: 30,
        precipitation: 0.0,
        humidity: 65,
        wind_speed: 12,
        weather: "Partly Cloudy",
        heat_index: 35,
    },
    CannedDay {
        temperature: 29,
        min_temperature: 25,
        chance_of_rain: 20,
        precipitation: 0.0,
        humidity: 60,
        wind_speed: 10,
        weather: "Sunny",
        heat_index: 36,
    },
    CannedDay {
        temperature: 27,
        min_temperature: 23,
        chance_of_rain: 45,
        precipitation: 2.0,
        humidity: 70,
        wind_speed: 15,
        weather: "Cloudy",
        heat_index: 34,
    },
    CannedDay {
        temperature: 26,
        min_temperature: 22,
        chance_of_rain: 60,
        precipitation: 5.0,
        humidity: 75,
        wind_speed: 18,
        weather: "Rainy",
        heat_index: 32,
    },
    CannedDay {
        temperature: 27,
        min_temperature: 23,
        chance_of_rain: 40,
        precipitation: 2.0,
        humidity: 68,
        wind_speed: 14,
        weather: "Partly Cloudy",
        heat_index: 33,
    },
    CannedDay {
        temperature: 29,
        min_temperature: 25,
        chance_of_rain: 15,
        precipitation: 0.0,
        humidity: 58,
        wind_speed: 9,
        weather: "Sunny",
        heat_index: 37,
    },
    CannedDay {
        temperature: 28,
        min_temperature: 24,
        chance_of_rain: 25,
        precipitation: 0.5,
        humidity: 62,
        wind_speed: 11,
        weather: "Partly Cloudy",
        heat_index: 35,
    },
];

/// Build the synthetic week for `location`, dated from `today`.
///
/// Day 0 is labelled `"Today"`; the rest get their weekday abbreviation.
pub fn fallback_forecast(location: &Location, today: NaiveDate) -> Forecast {
    let forecast: Vec<DayForecast> = CANNED_WEEK
        .iter()
        .zip(0u64..)
        .map(|(canned, offset)| {
            // Saturates at the end of chrono's calendar, far beyond any real "today".
            let date = today.checked_add_days(Days::new(offset)).unwrap_or(today);
            let day_name = if offset == 0 { "Today" } else { day_name(date) };

            DayForecast {
                date,
                day_name: day_name.to_string(),
                temperature: canned.temperature,
                min_temperature: canned.min_temperature,
                chance_of_rain: canned.chance_of_rain,
                precipitation: canned.precipitation,
                humidity: canned.humidity,
                wind_speed: canned.wind_speed,
                weather: canned.weather.to_string(),
                heat_index: canned.heat_index,
            }
        })
        .collect();

    Forecast {
        name: location.name.clone(),
        latitude: location.latitude,
        longitude: location.longitude,
        current: forecast[0].clone(),
        forecast,
    }
}
