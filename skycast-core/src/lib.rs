//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - The registry of supported municipalities
//! - Fetching daily forecasts from Open-Meteo
//! - Normalization of provider data into display-ready [`Forecast`] values
//! - The canned fallback forecast served when live data is unavailable
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod registry;
pub mod service;
pub mod state;

pub use conditions::{condition_glyph, condition_label};
pub use config::Config;
pub use error::ForecastError;
pub use fallback::fallback_forecast;
pub use model::{DayForecast, Forecast, RawDaily, RawProviderResponse};
pub use normalize::{day_name, heat_index, normalize};
pub use provider::{ForecastFetcher, OpenMeteoFetcher, fetcher_from_config};
pub use registry::{Location, LocationRegistry, LocationSummary};
pub use service::ForecastService;
pub use state::{RequestId, ViewPhase, ViewState};
