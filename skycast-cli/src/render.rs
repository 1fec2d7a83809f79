//! Plain-text rendering of forecasts for the terminal.

use std::fmt::{self, Write};

use skycast_core::{DayForecast, Forecast, ViewPhase, ViewState, condition_glyph};

fn loading_line() -> &'static str {
    "Loading weather data..."
}

/// Full report: headline card, details, then the seven-day table.
pub fn forecast_report(forecast: &Forecast) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, forecast);
    out
}

fn write_report(out: &mut impl Write, forecast: &Forecast) -> fmt::Result {
    let now = &forecast.current;

    writeln!(out, "{}", forecast.name)?;
    writeln!(out, "({:.4}, {:.4})\n", forecast.latitude, forecast.longitude)?;
    writeln!(
        out,
        "  {}  {}  {}°C",
        condition_glyph(&now.weather),
        now.weather,
        now.temperature
    )?;
    writeln!(out, "  💧 Chance of Rain   {}%", now.chance_of_rain)?;
    writeln!(out, "  🌡️ Heat Index       {}°C", now.heat_index)?;
    writeln!(out)?;
    writeln!(out, "  Humidity          {}%", now.humidity)?;
    writeln!(out, "  Wind Speed        {} km/h", now.wind_speed)?;
    writeln!(out, "  Min Temperature   {}°C", now.min_temperature)?;
    writeln!(out, "  Precipitation     {} mm", now.precipitation)?;
    writeln!(out)?;
    writeln!(out, "7-Day Forecast")?;

    for day in &forecast.forecast {
        writeln!(out, "{}", day_row(day))?;
    }

    Ok(())
}

fn day_row(day: &DayForecast) -> String {
    format!(
        "  {:<6} {:<7} {} {:<24} {:>3}° / {:>3}°  💧 {:>3}%  💨 {:>3} km/h",
        day.day_name,
        day.date.format("%b %d").to_string(),
        condition_glyph(&day.weather),
        day.weather,
        day.temperature,
        day.min_temperature,
        day.chance_of_rain,
        day.wind_speed
    )
}

/// Render whatever the view currently holds.
pub fn view(state: &ViewState) -> String {
    match state.phase() {
        ViewPhase::Idle => String::new(),
        ViewPhase::Loading { .. } => format!("{}\n", loading_line()),
        ViewPhase::Ready { forecast, .. } => forecast_report(forecast),
        ViewPhase::Failed { message, .. } => format!("Failed to load weather data: {message}\n"),
    }
}
