use crate::model::Coordinates;

/// Open-Meteo forecast endpoint.
pub const API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Fields requested for the `current` block.
pub const CURRENT_FIELDS: [&str; 5] = [
    "temperature_2m",
    "weather_code",
    "wind_speed_10m",
    "relative_humidity_2m",
    "apparent_temperature",
];

/// Fields requested for the `daily` block.
pub const DAILY_FIELDS: [&str; 3] = ["weather_code", "temperature_2m_max", "temperature_2m_min"];

/// Let the upstream pick the timezone from the coordinates.
pub const TIMEZONE: &str = "auto";

/// Label used when `get` is called without a location name.
pub const DEFAULT_LABEL: &str = "Your Location";

/// Request configuration for the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    pub base_url: String,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { base_url: API_URL.to_string() }
    }
}

impl ForecastConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Query parameters for a single forecast request, in wire order.
    pub fn query(&self, coordinates: &Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
            ("current", CURRENT_FIELDS.join(",")),
            ("daily", DAILY_FIELDS.join(",")),
            ("timezone", TIMEZONE.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_open_meteo() {
        let cfg = ForecastConfig::default();
        assert_eq!(cfg.base_url, "https://api.open-meteo.com/v1/forecast");
    }

    #[test]
    fn query_lists_all_parameters_in_order() {
        let coords = Coordinates::new(40.7128, -74.006, "New York").expect("valid coordinates");
        let query = ForecastConfig::default().query(&coords);

        let keys: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["latitude", "longitude", "current", "daily", "timezone"]);

        assert_eq!(query[0].1, "40.7128");
        assert_eq!(query[1].1, "-74.006");
        assert_eq!(
            query[2].1,
            "temperature_2m,weather_code,wind_speed_10m,relative_humidity_2m,apparent_temperature"
        );
        assert_eq!(query[3].1, "weather_code,temperature_2m_max,temperature_2m_min");
        assert_eq!(query[4].1, "auto");
    }
}
