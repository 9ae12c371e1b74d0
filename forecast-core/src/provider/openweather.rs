use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{ForecastError, model::DailyForecast};

use super::{ForecastSource, parse_daily};

/// One Call client: a single GET per fetch, transport defaults, no retries.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl ForecastSource for OpenWeatherClient {
    // The URL carries the API key, so it is never logged whole.
    #[instrument(skip_all, fields(host = url.host_str().unwrap_or_default(), path = url.path()))]
    async fn fetch_daily(&self, url: &Url) -> Result<Vec<DailyForecast>, ForecastError> {
        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "received OpenWeather response");

        if !status.is_success() {
            return Err(ForecastError::Status { status, body: truncate_body(&body) });
        }

        let days = parse_daily(&body)?;
        debug!(days = days.len(), "decoded daily forecast");
        Ok(days)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
