//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Settings resolution & the on-disk config
//! - Building the One Call request and decoding its `daily` block
//! - The two daily analyses and the text report
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod request;
pub mod service;
pub mod time;
pub mod units;

pub use config::{Config, Overrides, Settings};
pub use error::{ErrorKind, ForecastError};
pub use model::{Coordinate, DailyForecast};
pub use provider::{ForecastSource, OpenWeatherClient};
pub use report::{DayReport, Summary};
pub use request::{ForecastRequest, build_request_url};
pub use service::daily_summary;
pub use units::{ExcludeField, UnitSystem};
