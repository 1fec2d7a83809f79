use thiserror::Error;

/// Failures that can occur while producing a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The requested location id is not in the registry.
    #[error("Unknown location '{0}'")]
    NotFound(String),

    /// Transport failure or non-success HTTP status from the provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider payload did not have the expected shape.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ForecastError {
    /// Whether the orchestration layer substitutes fallback data for this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::MalformedResponse(_))
    }
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_recoverable() {
        assert!(!ForecastError::NotFound("nowhere".into()).is_recoverable());
        assert!(ForecastError::Network("timeout".into()).is_recoverable());
        assert!(ForecastError::MalformedResponse("bad".into()).is_recoverable());
    }

    #[test]
    fn json_errors_become_malformed_response() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let converted = ForecastError::from(err);
        assert!(matches!(converted, ForecastError::MalformedResponse(_)));
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = ForecastError::NotFound("atlantis".into());
        assert_eq!(err.to_string(), "Unknown location 'atlantis'");
    }
}
