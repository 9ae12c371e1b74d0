//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and the environment
//! - Interactive configuration
//! - Logging setup and exit status

use clap::Parser;
use forecast_core::ForecastError;
use std::{io, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    setup_logging(cmd.verbose);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ForecastError>() {
                Some(cause) => error!(kind = ?cause.kind(), "{err:#}"),
                None => error!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
