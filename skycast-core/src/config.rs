use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    provider::open_meteo::{DEFAULT_ENDPOINT, DEFAULT_TIMEZONE},
    registry::{Location, LocationRegistry},
};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Location id shown when none is given, e.g. "isabela".
    pub default_location: Option<String>,

    /// IANA timezone sent to the provider. Defaults to Asia/Manila.
    pub timezone: Option<String>,

    /// Provider URL override.
    pub endpoint: Option<String>,

    /// Replaces the built-in municipalities when non-empty.
    ///
    /// Example TOML:
    /// [[locations]]
    /// id = "bacolod"
    /// name = "Bacolod"
    /// latitude = 10.6765
    /// longitude = 122.9509
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Configured timezone; blank values count as unset.
    pub fn timezone(&self) -> &str {
        self.timezone
            .as_deref()
            .map(str::trim)
            .filter(|tz| !tz.is_empty())
            .unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Registry built from `locations`, or the built-in one when none are configured.
    pub fn registry(&self) -> Result<LocationRegistry> {
        if self.locations.is_empty() {
            return Ok(LocationRegistry::builtin());
        }

        LocationRegistry::from_locations(self.locations.clone())
            .context("Invalid [[locations]] table in config")
    }

    /// The configured default location, checked against `registry`.
    ///
    /// Falls back to the first registry entry when unset.
    pub fn default_location_id(&self, registry: &LocationRegistry) -> Result<String> {
        match &self.default_location {
            Some(id) => {
                registry.resolve(id).with_context(|| {
                    format!(
                        "Configured default location '{id}' is not available.\n\
                         Hint: run `skycast configure` or `skycast list`."
                    )
                })?;
                Ok(id.clone())
            }
            None => Ok(registry.first().id.clone()),
        }
    }

    pub fn set_default_location(&mut self, id: &str) {
        self.default_location = Some(id.to_string());
    }
}
