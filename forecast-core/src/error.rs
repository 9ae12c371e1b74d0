use reqwest::StatusCode;
use thiserror::Error;

/// Every way producing a forecast report can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(
        "No OpenWeather API key provided.\n\
         Hint: pass `--api-key`, set OPENWEATHER_API_KEY or run `forecast configure`."
    )]
    MissingApiKey,

    #[error("Unknown units '{0}'. Supported units: standard, metric, imperial.")]
    InvalidUnits(String),

    #[error(
        "Unknown exclude field '{0}'. Supported fields: current, minutely, hourly, daily, alerts."
    )]
    InvalidExclude(String),

    #[error("Failed to send request to OpenWeather")]
    Transport(#[from] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse OpenWeather forecast JSON")]
    Decode(#[from] serde_json::Error),

    #[error("Timestamp {0} is out of range")]
    Timestamp(i64),

    #[error("Failed to build request URL")]
    Url(#[from] url::ParseError),

    #[error("Forecast contains no data for the {0}")]
    NoResult(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Decode,
    Report,
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::MissingApiKey
            | ForecastError::InvalidUnits(_)
            | ForecastError::InvalidExclude(_)
            | ForecastError::Url(_) => ErrorKind::Configuration,
            ForecastError::Transport(_) | ForecastError::Status { .. } => ErrorKind::Transport,
            ForecastError::Decode(_) | ForecastError::Timestamp(_) => ErrorKind::Decode,
            ForecastError::NoResult(_) => ErrorKind::Report,
        }
    }
}
