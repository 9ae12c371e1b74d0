//! Linear scans over the daily sequence. Both keep the earliest day on ties.

use chrono::TimeDelta;

use crate::model::DailyForecast;

/// Starting bound for the minimum search; any real difference is far below it.
pub const MAX_TEMPERATURE_DIFFERENCE: f64 = 10_000.0;

/// How many leading days the day-length search looks at.
pub const DAY_DURATION_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureDifference {
    pub value: f64,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDuration {
    pub duration: TimeDelta,
    pub index: usize,
}

/// Day whose night feels-like temperature is closest to the actual one.
/// `None` for an empty sequence.
pub fn min_temperature_difference(days: &[DailyForecast]) -> Option<TemperatureDifference> {
    let mut best: Option<TemperatureDifference> = None;
    let mut min = MAX_TEMPERATURE_DIFFERENCE;

    for (index, day) in days.iter().enumerate() {
        let value = day.temperature_difference();
        if value < min {
            min = value;
            best = Some(TemperatureDifference { value, index });
        }
    }

    best
}

/// Day with the longest sunrise-to-sunset interval.
///
/// Only positive durations can win: if every day has sunset at or before
/// sunrise the result is `None`, even for a non-empty sequence.
pub fn max_day_duration(days: &[DailyForecast]) -> Option<DayDuration> {
    let mut best: Option<DayDuration> = None;
    let mut max = TimeDelta::zero();

    for (index, day) in days.iter().enumerate() {
        let duration = day.day_length();
        if duration > max {
            max = duration;
            best = Some(DayDuration { duration, index });
        }
    }

    best
}

/// The leading days the day-length search covers; shorter input is returned whole.
pub fn first_days(days: &[DailyForecast]) -> &[DailyForecast] {
    &days[..days.len().min(DAY_DURATION_WINDOW)]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    const BASE: i64 = 1_618_272_000;

    pub(crate) fn day(offset_days: i64, temp: f64, feels_like: f64, sunrise: i64, sunset: i64) -> DailyForecast {
        let start = BASE + offset_days * 86_400;
        let at = |secs: i64| DateTime::from_timestamp(start + secs, 0).unwrap();
        DailyForecast {
            timestamp: at(12 * 3600),
            sunrise: at(sunrise),
            sunset: at(sunset),
            night_temperature: temp,
            night_feels_like: feels_like,
        }
    }

    fn temps(pairs: &[(f64, f64)]) -> Vec<DailyForecast> {
        pairs.iter().enumerate().map(|(i, &(t, f))| day(i as i64, t, f, 0, 3600)).collect()
    }

    fn lengths(pairs: &[(i64, i64)]) -> Vec<DailyForecast> {
        pairs.iter().enumerate().map(|(i, &(r, s))| day(i as i64, 0.0, 0.0, r, s)).collect()
    }

    #[test]
    fn min_difference_scenario() {
        let days = temps(&[(10.0, 8.0), (5.0, 5.5), (20.0, 15.0)]);

        let result = min_temperature_difference(&days).unwrap();
        assert_eq!(result, TemperatureDifference { value: 0.5, index: 1 });
    }

    #[test]
    fn min_difference_ties_keep_earliest() {
        let days = temps(&[(3.0, 5.0), (1.0, 0.0), (-4.0, -3.0), (7.0, 9.0)]);

        let result = min_temperature_difference(&days).unwrap();
        assert_eq!(result.index, 1);
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn min_difference_is_the_smallest_present() {
        let days = temps(&[(-12.5, -20.0), (0.0, -0.25), (30.0, 33.0), (0.0, 0.0), (4.0, 4.0)]);

        let result = min_temperature_difference(&days).unwrap();
        let smallest = days.iter().map(DailyForecast::temperature_difference).fold(f64::MAX, f64::min);
        assert_eq!(result.value, smallest);
        assert_eq!(result.index, 3);
        assert_eq!(days[result.index].temperature_difference(), result.value);
    }

    #[test]
    fn min_difference_empty_is_none() {
        assert_eq!(min_temperature_difference(&[]), None);
    }

    #[test]
    fn max_duration_scenario() {
        let days = lengths(&[
            (6 * 3600, 16 * 3600),
            (5 * 3600, 19 * 3600 + 30 * 60),
            (8 * 3600, 17 * 3600 + 15 * 60),
        ]);

        let result = max_day_duration(&days).unwrap();
        assert_eq!(result.index, 1);
        assert_eq!(result.duration, TimeDelta::hours(14) + TimeDelta::minutes(30));
    }

    #[test]
    fn max_duration_ties_keep_earliest() {
        let days = lengths(&[(0, 100), (0, 200), (50, 250), (0, 150)]);

        assert_eq!(max_day_duration(&days).unwrap().index, 1);
    }

    #[test]
    fn max_duration_ignores_inverted_days() {
        let days = lengths(&[(500, 100), (0, 60), (300, 300)]);

        let result = max_day_duration(&days).unwrap();
        assert_eq!(result, DayDuration { duration: TimeDelta::seconds(60), index: 1 });
    }

    #[test]
    fn max_duration_without_positive_days_is_none() {
        assert_eq!(max_day_duration(&[]), None);
        assert_eq!(max_day_duration(&lengths(&[(100, 100), (200, 50)])), None);
    }

    #[test]
    fn first_days_caps_at_window() {
        let seven = lengths(&[(0, 1); 7]);
        assert_eq!(first_days(&seven).len(), DAY_DURATION_WINDOW);

        let three = lengths(&[(0, 1); 3]);
        assert_eq!(first_days(&three).len(), 3);
    }

    #[test]
    fn max_duration_over_first_days_skips_later_winner() {
        let mut pairs = vec![(0, 3600); 5];
        pairs.push((0, 20 * 3600));
        let days = lengths(&pairs);

        let result = max_day_duration(first_days(&days)).unwrap();
        assert_eq!(result.index, 0);
        assert_eq!(max_day_duration(&days).unwrap().index, 5);
    }
}
