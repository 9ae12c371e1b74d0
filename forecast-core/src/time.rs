use chrono::{DateTime, Utc};

use crate::ForecastError;

/// Converts seconds since the Unix epoch into a UTC instant.
pub fn decode_unix_seconds(ts: i64) -> Result<DateTime<Utc>, ForecastError> {
    DateTime::from_timestamp(ts, 0).ok_or(ForecastError::Timestamp(ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_is_the_epoch() {
        let dt = decode_unix_seconds(0).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(dt.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn decodes_forecast_timestamp() {
        let dt = decode_unix_seconds(1_618_308_000).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 4, 13, 10, 0, 0).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let err = decode_unix_seconds(i64::MAX).unwrap_err();
        assert!(matches!(err, ForecastError::Timestamp(i64::MAX)));
    }
}
