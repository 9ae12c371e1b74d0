use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

use crate::{
    ForecastError,
    analysis::{first_days, max_day_duration, min_temperature_difference},
    model::DailyForecast,
    units::UnitSystem,
};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Multi-line human-readable view of one day.
pub struct DayReport<'a>(pub &'a DailyForecast);

impl fmt::Display for DayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0;
        writeln!(f, "Дата и время: {}", day.timestamp)?;
        writeln!(f, "Время рассвета: {}", day.sunrise)?;
        writeln!(f, "Время заката: {}", day.sunset)?;
        writeln!(f, "Фактическая температура: {:.3}", day.night_temperature)?;
        writeln!(f, "Ощущаемая температура: {:.3}", day.night_feels_like)
    }
}

/// `HH:MM:SS`, rounded to the nearest second. Hours do not wrap at 24.
pub fn format_duration(duration: TimeDelta) -> String {
    let mut secs = duration.num_seconds();
    // subsec_nanos carries the same sign as the whole value
    let nanos = duration.subsec_nanos();
    if nanos.abs() >= 500_000_000 {
        secs += i64::from(nanos.signum());
    }

    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!("{sign}{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

/// Outcome of both analyses, with the winning days resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub units: UnitSystem,
    pub min_difference: f64,
    pub min_difference_day: DateTime<Utc>,
    pub max_duration: TimeDelta,
    pub max_duration_day: DateTime<Utc>,
}

impl Summary {
    /// Runs both analyses; the day-length one only over the leading days.
    pub fn from_days(days: &[DailyForecast], units: UnitSystem) -> Result<Self, ForecastError> {
        let diff = min_temperature_difference(days)
            .ok_or(ForecastError::NoResult("temperature difference"))?;
        let longest = max_day_duration(first_days(days))
            .ok_or(ForecastError::NoResult("day duration"))?;

        Ok(Self {
            units,
            min_difference: diff.value,
            min_difference_day: days[diff.index].timestamp,
            max_duration: longest.duration,
            max_duration_day: days[longest.index].timestamp,
        })
    }
}

impl fmt::Display for Summary {
    // One space before the date on both lines, so they line up alike.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "День с минимальной разницей между фактической и \"ощущаемой\" температурой ({:.3} {}): {}",
            self.min_difference,
            self.units.abbreviation(),
            self.min_difference_day.format(DATE_FORMAT),
        )?;
        writeln!(
            f,
            "День с максимальной продолжительностью дня ({}): {}",
            format_duration(self.max_duration),
            self.max_duration_day.format(DATE_FORMAT),
        )
    }
}
