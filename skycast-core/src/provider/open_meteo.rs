use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::ForecastError,
    model::{FORECAST_DAYS, RawProviderResponse},
};

use super::ForecastFetcher;

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEZONE: &str = "Asia/Manila";

/// Daily fields requested from Open-Meteo, in request order.
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,\
precipitation_probability_max,windspeed_10m_max,relative_humidity_2m_max,weathercode";

#[derive(Debug, Clone)]
pub struct OpenMeteoFetcher {
    endpoint: String,
    timezone: String,
    http: Client,
}

impl OpenMeteoFetcher {
    pub fn new(endpoint: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timezone: timezone.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl Default for OpenMeteoFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEZONE)
    }
}

#[async_trait]
impl ForecastFetcher for OpenMeteoFetcher {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawProviderResponse, ForecastError> {
        tracing::debug!(latitude, longitude, endpoint = %self.endpoint, "requesting daily forecast");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", self.timezone.clone()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                ForecastError::Network(format!("Failed to send request to Open-Meteo: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            ForecastError::Network(format!("Failed to read Open-Meteo response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(ForecastError::Network(format!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: RawProviderResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
