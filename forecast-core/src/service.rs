use tracing::{debug, info};

use crate::{
    ForecastError,
    config::Settings,
    provider::ForecastSource,
    report::{DayReport, Summary},
    request::build_request_url,
};

/// Build URL, fetch, analyze. The first error ends the run.
pub async fn daily_summary(
    source: &dyn ForecastSource,
    settings: &Settings,
) -> Result<Summary, ForecastError> {
    let url = build_request_url(&settings.request())?;
    info!(
        latitude = settings.coordinate.latitude,
        longitude = settings.coordinate.longitude,
        units = %settings.units,
        "requesting daily forecast"
    );

    let days = source.fetch_daily(&url).await?;
    debug!(days = days.len(), "analyzing forecast");
    for day in &days {
        debug!("\n{}", DayReport(day));
    }

    Summary::from_days(&days, settings.units)
}
