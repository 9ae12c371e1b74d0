use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    Config, Coordinate, OpenWeatherClient, Overrides, Settings, UnitSystem, daily_summary,
};
use inquire::{CustomType, Password, PasswordDisplayMode, Select, Text};
use std::env;
use tracing::{debug, info, warn};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Daily forecast report from OpenWeather",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub report: ReportArgs,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store API key and defaults in the config file.
    Configure,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// OpenWeather API key; takes precedence over OPENWEATHER_API_KEY.
    #[arg(long, alias = "api_key")]
    pub api_key: Option<String>,

    /// Latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Temperature units: standard (K), metric (C) or imperial (F).
    #[arg(long)]
    pub units: Option<String>,

    /// Language code passed to the API, e.g. "ru".
    #[arg(long)]
    pub lang: Option<String>,

    /// Comma-separated blocks to leave out of the response
    /// (current, minutely, hourly, daily, alerts). Defaults to everything but daily.
    #[arg(long)]
    pub exclude: Option<String>,
}

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

impl ReportArgs {
    /// `env_api_key` is only used when `--api-key` is absent or empty.
    pub fn into_overrides(self, env_api_key: Option<String>) -> Overrides {
        Overrides {
            api_key: self.api_key,
            env_api_key,
            units: self.units,
            language: self.lang,
            latitude: self.latitude,
            longitude: self.longitude,
            exclude: self.exclude,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => report(self.report).await,
        }
    }
}

async fn report(args: ReportArgs) -> anyhow::Result<()> {
    let config = config_or_default(Config::load());
    let overrides = args.into_overrides(env::var(API_KEY_ENV).ok());
    let settings = Settings::resolve(&overrides, &config)?;
    debug!(coordinate = ?settings.coordinate, units = %settings.units, "resolved settings");

    let summary = daily_summary(&OpenWeatherClient::new(), &settings).await?;
    print!("{summary}");
    Ok(())
}

/// Flags and the environment can cover everything, so a broken config file
/// only costs its defaults.
fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!("ignoring config file: {err:#}");
        Config::default()
    })
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let current = config
        .units
        .as_deref()
        .and_then(|u| u.parse::<UnitSystem>().ok())
        .unwrap_or_default();
    let cursor = UnitSystem::all().iter().position(|u| *u == current).unwrap_or(0);
    let units = Select::new("Default units:", UnitSystem::all().to_vec())
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read units")?;
    config.units = Some(units.as_str().to_string());

    let latitude = CustomType::<f64>::new("Default latitude:")
        .with_default(config.latitude.unwrap_or(Coordinate::DEFAULT.latitude))
        .prompt()
        .context("Failed to read latitude")?;
    let longitude = CustomType::<f64>::new("Default longitude:")
        .with_default(config.longitude.unwrap_or(Coordinate::DEFAULT.longitude))
        .prompt()
        .context("Failed to read longitude")?;
    config.latitude = Some(latitude);
    config.longitude = Some(longitude);

    let language = Text::new("Language code (empty for API default):")
        .with_initial_value(config.language.as_deref().unwrap_or_default())
        .prompt()
        .context("Failed to read language")?;
    config.language = Some(language.trim().to_string()).filter(|l| !l.is_empty());

    let path = config.save()?;
    info!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());
    Ok(())
}
