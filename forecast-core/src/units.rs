use std::{fmt, str::FromStr};

use crate::ForecastError;

/// Temperature unit system understood by the One Call API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// Kelvin.
    Standard,
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Standard => "standard",
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Short label printed next to temperatures.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Standard => "K",
            UnitSystem::Metric => "C",
            UnitSystem::Imperial => "F",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Standard, UnitSystem::Metric, UnitSystem::Imperial]
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UnitSystem::all()
            .iter()
            .copied()
            .find(|units| units.as_str() == value)
            .ok_or_else(|| ForecastError::InvalidUnits(value.to_string()))
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = ForecastError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Data blocks the API can be asked to leave out of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcludeField {
    Current,
    Minutely,
    Hourly,
    Daily,
    Alerts,
}

impl ExcludeField {
    /// Everything except the daily block.
    pub const ONLY_DAILY: &'static [ExcludeField] = &[
        ExcludeField::Current,
        ExcludeField::Minutely,
        ExcludeField::Hourly,
        ExcludeField::Alerts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExcludeField::Current => "current",
            ExcludeField::Minutely => "minutely",
            ExcludeField::Hourly => "hourly",
            ExcludeField::Daily => "daily",
            ExcludeField::Alerts => "alerts",
        }
    }

    pub const fn all() -> &'static [ExcludeField] {
        &[
            ExcludeField::Current,
            ExcludeField::Minutely,
            ExcludeField::Hourly,
            ExcludeField::Daily,
            ExcludeField::Alerts,
        ]
    }

    /// Parses a comma-separated list such as `"current,hourly"`.
    /// Blank entries are skipped; an unknown entry fails the whole list.
    pub fn parse_list(value: &str) -> Result<Vec<ExcludeField>, ForecastError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse)
            .collect()
    }

    pub fn join(fields: &[ExcludeField]) -> String {
        fields.iter().map(ExcludeField::as_str).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for ExcludeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExcludeField {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ExcludeField::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| ForecastError::InvalidExclude(value.to_string()))
    }
}
