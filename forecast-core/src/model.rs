use chrono::{DateTime, TimeDelta, Utc};

/// Geographic point, degrees. Range checking is left to the API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Ufa.
    pub const DEFAULT: Coordinate = Coordinate { latitude: 54.733334, longitude: 56.0 };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The slice of one `daily` element the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub timestamp: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub night_temperature: f64,
    pub night_feels_like: f64,
}

impl DailyForecast {
    pub fn temperature_difference(&self) -> f64 {
        (self.night_feels_like - self.night_temperature).abs()
    }

    /// Sunset minus sunrise; negative if the data is inverted.
    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }
}
