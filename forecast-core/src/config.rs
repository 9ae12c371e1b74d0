use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ForecastError,
    model::Coordinate,
    request::ForecastRequest,
    units::{ExcludeField, UnitSystem},
};

/// Stored defaults, all optional.
///
/// Example TOML:
/// api_key = "..."
/// units = "imperial"
/// latitude = 55.75
/// longitude = 37.62
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub units: Option<String>,
    pub language: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Values given on the command line or through the environment. They win
/// over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    /// `OPENWEATHER_API_KEY`, consulted when the flag is absent or empty.
    pub env_api_key: Option<String>,
    /// Comma-separated exclude list; `ONLY_DAILY` when not given.
    pub exclude: Option<String>,
    pub units: Option<String>,
    pub language: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Fully resolved, validated run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub coordinate: Coordinate,
    pub units: UnitSystem,
    pub language: Option<String>,
    pub exclude: Vec<ExcludeField>,
}

impl Settings {
    /// Merges overrides, config file and built-in defaults, in that order.
    /// Empty strings count as not given.
    pub fn resolve(overrides: &Overrides, config: &Config) -> Result<Self, ForecastError> {
        let api_key = pick(&[&overrides.api_key, &overrides.env_api_key, &config.api_key])
            .ok_or(ForecastError::MissingApiKey)?;

        let units = match pick(&[&overrides.units, &config.units]) {
            Some(units) => units.parse()?,
            None => UnitSystem::default(),
        };

        let coordinate = Coordinate::new(
            overrides.latitude.or(config.latitude).unwrap_or(Coordinate::DEFAULT.latitude),
            overrides.longitude.or(config.longitude).unwrap_or(Coordinate::DEFAULT.longitude),
        );

        let exclude = match pick(&[&overrides.exclude]) {
            Some(list) => ExcludeField::parse_list(&list)?,
            None => ExcludeField::ONLY_DAILY.to_vec(),
        };

        Ok(Self {
            api_key,
            coordinate,
            units,
            language: pick(&[&overrides.language, &config.language]),
            exclude,
        })
    }

    pub fn request(&self) -> ForecastRequest {
        ForecastRequest {
            coordinate: self.coordinate,
            api_key: self.api_key.clone(),
            units: Some(self.units),
            language: self.language.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

/// First non-blank value, in priority order.
fn pick(layers: &[&Option<String>]) -> Option<String> {
    layers
        .iter()
        .copied()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
