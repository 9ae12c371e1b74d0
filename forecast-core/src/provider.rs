use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;
use url::Url;

use crate::{ForecastError, model::DailyForecast, time::decode_unix_seconds};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Something that can turn a request URL into the daily forecast sequence.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_daily(&self, url: &Url) -> Result<Vec<DailyForecast>, ForecastError>;
}

#[derive(Debug, Deserialize)]
struct OwNight {
    night: f64,
}

#[derive(Debug, Deserialize)]
struct OwDaily {
    dt: i64,
    sunrise: i64,
    sunset: i64,
    temp: OwNight,
    feels_like: OwNight,
}

#[derive(Debug, Deserialize)]
struct OwOneCallResponse {
    daily: Vec<OwDaily>,
}

impl TryFrom<OwDaily> for DailyForecast {
    type Error = ForecastError;

    fn try_from(day: OwDaily) -> Result<Self, Self::Error> {
        Ok(DailyForecast {
            timestamp: decode_unix_seconds(day.dt)?,
            sunrise: decode_unix_seconds(day.sunrise)?,
            sunset: decode_unix_seconds(day.sunset)?,
            night_temperature: day.temp.night,
            night_feels_like: day.feels_like.night,
        })
    }
}

/// Decodes a One Call response body, keeping only the `daily` records in the
/// order the API returned them.
pub fn parse_daily(body: &str) -> Result<Vec<DailyForecast>, ForecastError> {
    let parsed: OwOneCallResponse = serde_json::from_str(body)?;
    parsed.daily.into_iter().map(DailyForecast::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::{TimeZone, Utc};

    const BODY: &str = r#"{
        "lat": 54.7333, "lon": 56.0, "timezone": "Asia/Yekaterinburg",
        "daily": [
            {
                "dt": 1618308000, "sunrise": 1618274400, "sunset": 1618325400,
                "temp": {"day": 12.1, "min": 3.2, "max": 13.5, "night": 4.5, "eve": 9.0, "morn": 3.4},
                "feels_like": {"day": 10.2, "night": 1.9, "eve": 7.7, "morn": 0.5},
                "pressure": 1015, "humidity": 40, "weather": [{"id": 800, "main": "Clear"}]
            },
            {
                "dt": 1618394400, "sunrise": 1618360680, "sunset": 1618411920,
                "temp": {"night": 6.25}, "feels_like": {"night": 6.0}
            }
        ]
    }"#;

    #[test]
    fn parses_daily_records_in_order() {
        let days = parse_daily(BODY).unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].timestamp, Utc.with_ymd_and_hms(2021, 4, 13, 10, 0, 0).unwrap());
        assert_eq!(days[0].sunrise, Utc.with_ymd_and_hms(2021, 4, 13, 0, 40, 0).unwrap());
        assert_eq!(days[0].night_temperature, 4.5);
        assert_eq!(days[0].night_feels_like, 1.9);
        assert_eq!(days[1].night_temperature, 6.25);
        assert_eq!(days[1].night_feels_like, 6.0);
    }

    #[test]
    fn empty_daily_is_not_an_error() {
        assert!(parse_daily(r#"{"daily": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_daily_is_a_decode_error() {
        let err = parse_daily(r#"{"current": {}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn mistyped_timestamp_is_a_decode_error() {
        let body = r#"{"daily": [{"dt": "today", "sunrise": 0, "sunset": 0,
            "temp": {"night": 1.0}, "feels_like": {"night": 1.0}}]}"#;
        assert!(matches!(parse_daily(body).unwrap_err(), ForecastError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(parse_daily("{\"daily\": [").unwrap_err(), ForecastError::Decode(_)));
    }
}
