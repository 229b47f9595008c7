//! Fetch, validate and render: one request per call.

use tracing::instrument;

use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherSummary},
    provider::ForecastProvider,
    report, resolver,
};

/// Fetch the forecast for `coordinates` and render the report.
///
/// Nothing is rendered unless every required field is present.
#[instrument(skip(provider), fields(label = coordinates.label()))]
pub async fn run(
    provider: &dyn ForecastProvider,
    coordinates: &Coordinates,
) -> Result<String, WeatherError> {
    let response = provider.fetch(coordinates).await?;
    let summary = WeatherSummary::try_from(&response)?;

    Ok(report::render(coordinates.label(), &summary))
}

/// Validate raw `get` arguments, then [`run`]. Invalid input never reaches the provider.
pub async fn get_weather(
    provider: &dyn ForecastProvider,
    latitude: &str,
    longitude: &str,
    label: Option<&str>,
) -> Result<String, WeatherError> {
    let coordinates = resolver::resolve_explicit(latitude, longitude, label)?;
    run(provider, &coordinates).await
}
