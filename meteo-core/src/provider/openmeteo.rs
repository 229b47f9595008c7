use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::ForecastConfig,
    error::WeatherError,
    model::{Coordinates, ForecastResponse},
};

use super::ForecastProvider;

/// Client for the Open-Meteo forecast API. No key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    config: ForecastConfig,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

impl OpenMeteoProvider {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config, http: Client::new() }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self, coordinates: &Coordinates) -> Result<ForecastResponse, WeatherError> {
        let query = self.config.query(coordinates);
        debug!(url = %self.config.base_url, ?query, "requesting forecast");

        let res = self.http.get(&self.config.base_url).query(&query).send().await?;

        let status = res.status();
        let body = res.text().await?;
        info!(status = status.as_u16(), bytes = body.len(), "forecast response received");

        if !status.is_success() {
            debug!(status = status.as_u16(), "forecast request rejected");
            return Err(WeatherError::Transport {
                message: format!("Request failed with status code {}", status.as_u16()),
                status: Some(status.as_u16()),
                body: Some(truncate_body(&body)),
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            debug!(error = %err, "forecast response did not match the expected schema");
            WeatherError::malformed(err.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
