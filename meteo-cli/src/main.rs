//! Binary crate for the `weather-cli` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Reporting errors and exit codes

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use meteo_core::WeatherError;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);

    let result = cmd.run().await;
    finish(result, &mut io::stderr())
}

/// Map the run result to an exit code, printing any error to `out`.
fn finish(result: anyhow::Result<()>, out: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing sensible left to do if stderr itself is gone.
            let _ = report_error(out, &err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn report_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    match err.downcast_ref::<WeatherError>() {
        Some(WeatherError::InvalidCoordinates { .. }) => {
            writeln!(out, "{} {err}", "Error:".red())?;
        }
        Some(weather) => {
            writeln!(out, "{} {weather}", "Error fetching weather data:".red())?;
            if let Some(status) = weather.status() {
                writeln!(out, "{} {status}", "Status:".red())?;
            }
            if let Some(body) = weather.body() {
                writeln!(out, "{} {body}", "Data:".red())?;
            }
        }
        None => writeln!(out, "{} {err:#}", "Error:".red())?,
    }
    Ok(())
}
