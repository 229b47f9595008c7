use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, model::{Coordinates, ForecastResponse}};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// A source of forecast data for a single point.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastResponse, WeatherError>;
}
