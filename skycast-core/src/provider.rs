use crate::{Config, error::ForecastError, model::RawProviderResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::OpenMeteoFetcher;

/// Source of raw daily forecast data for a pair of coordinates.
///
/// One call is one attempt; implementations never retry.
#[async_trait]
pub trait ForecastFetcher: Send + Sync + Debug {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawProviderResponse, ForecastError>;
}

/// Construct the Open-Meteo fetcher with endpoint and timezone taken from config.
pub fn fetcher_from_config(config: &Config) -> Box<dyn ForecastFetcher> {
    Box::new(OpenMeteoFetcher::new(config.endpoint(), config.timezone()))
}
