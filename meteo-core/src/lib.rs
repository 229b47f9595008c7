//! Core library for the `weather-cli` tool.
//!
//! This crate defines:
//! - Coordinate validation and the built-in city table
//! - The Open-Meteo client behind the `ForecastProvider` trait
//! - The weather-code table and the text report
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod resolver;

pub use config::{DEFAULT_LABEL, ForecastConfig};
pub use error::WeatherError;
pub use model::{Coordinates, ForecastResponse, WeatherSummary};
pub use provider::{ForecastProvider, OpenMeteoProvider};
pub use resolver::City;
