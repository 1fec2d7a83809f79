//! Selection state for an interactive forecast view.

use crate::{error::ForecastError, model::Forecast};

/// Identifies one `select` call. Later selections get larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading {
        location_id: String,
    },
    Ready {
        location_id: String,
        forecast: Forecast,
    },
    Failed {
        location_id: String,
        message: String,
    },
}

/// What the view shows, plus the id of the most recent selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    phase: ViewPhase,
    latest: u64,
}

impl ViewState {
    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Start loading `location_id`, replacing whatever was shown.
    pub fn select(&mut self, location_id: &str) -> RequestId {
        self.latest += 1;
        self.phase = ViewPhase::Loading {
            location_id: location_id.to_string(),
        };
        RequestId(self.latest)
    }

    /// Apply the outcome of `request`.
    ///
    /// Only the most recent selection is applied, and only once; anything
    /// else is dropped and `false` is returned.
    pub fn finish(&mut self, request: RequestId, result: Result<Forecast, ForecastError>) -> bool {
        if request.0 != self.latest {
            tracing::debug!(request = request.0, latest = self.latest, "discarding superseded result");
            return false;
        }

        let location_id = match std::mem::take(&mut self.phase) {
            ViewPhase::Loading { location_id } => location_id,
            settled => {
                self.phase = settled;
                return false;
            }
        };

        self.phase = match result {
            Ok(forecast) => ViewPhase::Ready {
                location_id,
                forecast,
            },
            Err(err) => ViewPhase::Failed {
                location_id,
                message: err.to_string(),
            },
        };
        true
    }
}
