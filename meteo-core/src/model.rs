use serde::Deserialize;

use crate::{config::DEFAULT_LABEL, error::WeatherError};

/// A validated point on the globe plus the name shown in the report header.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
    label: String,
}

impl Coordinates {
    /// Build coordinates, rejecting NaN, infinities and out-of-range values.
    ///
    /// A blank label falls back to [`DEFAULT_LABEL`].
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Result<Self, WeatherError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(WeatherError::invalid_coordinates(
                "Latitude and longitude must be numbers.",
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::invalid_coordinates(format!(
                "Latitude {latitude} is out of range; expected a value between -90 and 90."
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::invalid_coordinates(format!(
                "Longitude {longitude} is out of range; expected a value between -180 and 180."
            )));
        }

        let label = label.into();
        let label = if label.trim().is_empty() { DEFAULT_LABEL.to_string() } else { label };

        Ok(Self { latitude, longitude, label })
    }

    /// For compile-time constants that are known to be in range.
    pub(crate) fn trusted(latitude: f64, longitude: f64, label: &str) -> Self {
        debug_assert!((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude));
        Self { latitude, longitude, label: label.to_string() }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The subset of the Open-Meteo payload this tool consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub weather_code: i64,
    pub wind_speed_10m: f64,
    pub relative_humidity_2m: f64,
}

/// Per-day sequences; index 0 is today. The upstream emits `null` for missing days.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub weather_code: Vec<Option<i64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}

/// Fully validated values that end up in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub temperature: f64,
    pub feels_like: f64,
    pub current_code: i64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub today_code: i64,
    pub today_max: f64,
    pub today_min: f64,
}

impl TryFrom<&ForecastResponse> for WeatherSummary {
    type Error = WeatherError;

    fn try_from(response: &ForecastResponse) -> Result<Self, Self::Error> {
        let current = &response.current;
        let daily = &response.daily;

        Ok(Self {
            temperature: current.temperature_2m,
            feels_like: current.apparent_temperature,
            current_code: current.weather_code,
            wind_speed: current.wind_speed_10m,
            humidity: current.relative_humidity_2m,
            today_code: today(&daily.weather_code, "daily.weather_code")?,
            today_max: today(&daily.temperature_2m_max, "daily.temperature_2m_max")?,
            today_min: today(&daily.temperature_2m_min, "daily.temperature_2m_min")?,
        })
    }
}

fn today<T: Copy>(values: &[Option<T>], field: &str) -> Result<T, WeatherError> {
    values
        .first()
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::malformed(format!("missing value for `{field}[0]`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn response(json: &str) -> ForecastResponse {
        serde_json::from_str(json).expect("fixture must deserialize")
    }

    const FULL: &str = r#"{
        "latitude": 40.71,
        "longitude": -74.0,
        "timezone": "America/New_York",
        "current": {
            "time": "2024-05-01T12:00",
            "temperature_2m": 21.5,
            "weather_code": 0,
            "wind_speed_10m": 12.3,
            "relative_humidity_2m": 45,
            "apparent_temperature": 20.1
        },
        "daily": {
            "time": ["2024-05-01", "2024-05-02"],
            "weather_code": [3, 61],
            "temperature_2m_max": [24.0, 19.2],
            "temperature_2m_min": [12.4, 11.0]
        }
    }"#;

    #[test]
    fn coordinates_keep_label() {
        let coords = Coordinates::new(51.5074, -0.1278, "London").unwrap();
        assert_eq!(coords.latitude(), 51.5074);
        assert_eq!(coords.longitude(), -0.1278);
        assert_eq!(coords.label(), "London");
    }

    #[test]
    fn blank_label_falls_back_to_default() {
        let coords = Coordinates::new(0.0, 0.0, "  ").unwrap();
        assert_eq!(coords.label(), DEFAULT_LABEL);
    }

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn boundaries_are_inclusive(#[case] lat: f64, #[case] lon: f64) {
        assert!(Coordinates::new(lat, lon, "edge").is_ok());
    }

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(-90.5, 0.0)]
    #[case(0.0, 180.1)]
    #[case(0.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::NAN)]
    #[case(f64::INFINITY, 0.0)]
    fn rejects_invalid_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let err = Coordinates::new(lat, lon, "bad").unwrap_err();
        assert!(matches!(err, WeatherError::InvalidCoordinates { .. }));
    }

    #[test]
    fn summary_takes_today_from_index_zero() {
        let summary = WeatherSummary::try_from(&response(FULL)).unwrap();

        assert_eq!(
            summary,
            WeatherSummary {
                temperature: 21.5,
                feels_like: 20.1,
                current_code: 0,
                wind_speed: 12.3,
                humidity: 45.0,
                today_code: 3,
                today_max: 24.0,
                today_min: 12.4,
            }
        );
    }

    #[test]
    fn missing_current_field_fails_to_deserialize() {
        let json = FULL.replace(r#""wind_speed_10m": 12.3,"#, "");
        let err = serde_json::from_str::<ForecastResponse>(&json).unwrap_err();
        assert!(err.to_string().contains("wind_speed_10m"));
    }

    #[test]
    fn null_today_value_is_malformed() {
        let json = FULL.replace("[24.0, 19.2]", "[null, 19.2]");
        let err = WeatherSummary::try_from(&response(&json)).unwrap_err();

        assert!(matches!(err, WeatherError::MalformedResponse { .. }));
        assert!(err.to_string().contains("daily.temperature_2m_max[0]"));
    }

    #[test]
    fn empty_daily_sequence_is_malformed() {
        let json = FULL.replace("[3, 61]", "[]");
        let err = WeatherSummary::try_from(&response(&json)).unwrap_err();
        assert!(err.to_string().contains("daily.weather_code[0]"));
    }
}
