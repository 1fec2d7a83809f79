use chrono::{Local, NaiveDate};

use crate::{
    error::ForecastError,
    fallback::fallback_forecast,
    model::Forecast,
    normalize::normalize,
    provider::ForecastFetcher,
    registry::{LocationRegistry, LocationSummary},
};

/// Resolves a location, fetches and normalizes its forecast, and substitutes
/// the canned forecast when the provider cannot be used.
#[derive(Debug)]
pub struct ForecastService {
    registry: LocationRegistry,
    fetcher: Box<dyn ForecastFetcher>,
    today: fn() -> NaiveDate,
}

impl ForecastService {
    pub fn new(registry: LocationRegistry, fetcher: Box<dyn ForecastFetcher>) -> Self {
        Self {
            registry,
            fetcher,
            today: local_today,
        }
    }

    /// Replace the clock used to date fallback forecasts.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn locations(&self) -> Vec<LocationSummary> {
        self.registry.list_all()
    }

    /// Forecast for `location_id`.
    ///
    /// Recoverable failures (see [`ForecastError::is_recoverable`]) are logged
    /// and replaced by [`ForecastService::fallback`]; anything else is returned.
    pub async fn get_forecast(&self, location_id: &str) -> Result<Forecast, ForecastError> {
        let location = self.registry.resolve(location_id)?;

        let live = match self.fetcher.fetch(location.latitude, location.longitude).await {
            Ok(raw) => normalize(&raw, location),
            Err(err) => Err(err),
        };

        match live {
            Ok(forecast) => {
                tracing::info!(location = %location.id, "loaded live forecast");
                Ok(forecast)
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(location = %location.id, error = %err, "serving fallback forecast");
                Ok(fallback_forecast(location, (self.today)()))
            }
            Err(err) => Err(err),
        }
    }

    /// The canned forecast for `location_id`, dated from the service clock.
    pub fn fallback(&self, location_id: &str) -> Result<Forecast, ForecastError> {
        let location = self.registry.resolve(location_id)?;
        Ok(fallback_forecast(location, (self.today)()))
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
