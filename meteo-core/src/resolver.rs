use std::fmt;

use crate::{config::DEFAULT_LABEL, error::WeatherError, model::Coordinates};

/// Cities with a dedicated subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    NewYork,
    London,
    Tokyo,
    Sydney,
}

impl City {
    /// CLI keyword for the city.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::NewYork => "new-york",
            City::London => "london",
            City::Tokyo => "tokyo",
            City::Sydney => "sydney",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::London => "London",
            City::Tokyo => "Tokyo",
            City::Sydney => "Sydney",
        }
    }

    pub const fn all() -> &'static [City] {
        &[City::NewYork, City::London, City::Tokyo, City::Sydney]
    }

    pub fn coordinates(&self) -> Coordinates {
        let (latitude, longitude) = match self {
            City::NewYork => (40.7128, -74.0060),
            City::London => (51.5074, -0.1278),
            City::Tokyo => (35.6762, 139.6503),
            City::Sydney => (-33.8688, 151.2093),
        };

        Coordinates::trusted(latitude, longitude, self.name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn raw `get` arguments into coordinates without touching the network.
pub fn resolve_explicit(
    latitude: &str,
    longitude: &str,
    label: Option<&str>,
) -> Result<Coordinates, WeatherError> {
    let latitude = parse_number(latitude)?;
    let longitude = parse_number(longitude)?;

    Coordinates::new(latitude, longitude, label.unwrap_or(DEFAULT_LABEL))
}

fn parse_number(raw: &str) -> Result<f64, WeatherError> {
    raw.trim().parse::<f64>().map_err(|_| {
        WeatherError::invalid_coordinates("Latitude and longitude must be numbers.")
    })
}
