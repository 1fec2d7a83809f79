use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// A selectable municipality with known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(id: &str, name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
        }
    }
}

/// Id and display name pair, as offered to a location picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
}

/// Immutable, insertion-ordered table of supported locations.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    /// The municipalities of Negros Occidental shipped with the app.
    pub fn builtin() -> Self {
        Self {
            locations: vec![
                Location::new("isabela", "Isabela", 10.7034, 122.0819),
                Location::new("binalbagan", "Binalbagan", 10.3119, 122.5369),
                Location::new("hinigaran", "Hinigaran", 10.4603, 122.8275),
                Location::new("moisesPadilla", "Moises Padilla", 10.2469, 122.7875),
                Location::new("himamaylan", "Himamaylan", 10.2969, 122.9669),
                Location::new("laCastellana", "La Castellana", 10.5119, 123.1403),
            ],
        }
    }

    /// Build a registry from an explicit list, rejecting empty and duplicate ids.
    pub fn from_locations(locations: Vec<Location>) -> anyhow::Result<Self> {
        if locations.is_empty() {
            anyhow::bail!("Location registry must contain at least one location");
        }

        for (idx, location) in locations.iter().enumerate() {
            if location.id.trim().is_empty() {
                anyhow::bail!("Location #{} has an empty id", idx + 1);
            }
            if locations[..idx].iter().any(|l| l.id == location.id) {
                anyhow::bail!("Duplicate location id '{}'", location.id);
            }
        }

        Ok(Self { locations })
    }

    pub fn resolve(&self, id: &str) -> Result<&Location, ForecastError> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| ForecastError::NotFound(id.to_string()))
    }

    /// All locations in definition order.
    pub fn list_all(&self) -> Vec<LocationSummary> {
        self.locations
            .iter()
            .map(|l| LocationSummary {
                id: l.id.clone(),
                name: l.name.clone(),
            })
            .collect()
    }

    /// First location in definition order, used when nothing is selected.
    pub fn first(&self) -> &Location {
        // from_locations and builtin both guarantee a non-empty list
        &self.locations[0]
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
