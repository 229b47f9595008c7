//! WMO weather interpretation codes as reported by Open-Meteo.

use std::{collections::HashMap, sync::LazyLock};

/// Shown for any code missing from the table.
pub const UNKNOWN: &str = "❓ Unknown";

static DESCRIPTIONS: LazyLock<HashMap<i64, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "☀️ Clear sky"),
        (1, "🌤️ Mainly clear"),
        (2, "⛅ Partly cloudy"),
        (3, "☁️ Overcast"),
        (45, "🌫️ Foggy"),
        (48, "🌫️ Depositing rime fog"),
        (51, "🌦️ Light drizzle"),
        (53, "🌧️ Moderate drizzle"),
        (55, "🌧️ Dense drizzle"),
        (61, "🌧️ Slight rain"),
        (63, "🌧️ Moderate rain"),
        (65, "⛈️ Heavy rain"),
        (71, "❄️ Slight snow"),
        (73, "❄️ Moderate snow"),
        (75, "❄️ Heavy snow"),
        (77, "❄️ Snow grains"),
        (80, "🌧️ Slight rain showers"),
        (81, "🌧️ Moderate rain showers"),
        (82, "⛈️ Violent rain showers"),
        (85, "❄️ Slight snow showers"),
        (86, "❄️ Heavy snow showers"),
        (95, "⛈️ Thunderstorm"),
        (96, "⛈️ Thunderstorm with slight hail"),
        (99, "⛈️ Thunderstorm with heavy hail"),
    ])
});

/// Human-readable description for a weather code, or [`UNKNOWN`].
pub fn describe(code: i64) -> &'static str {
    DESCRIPTIONS.get(&code).copied().unwrap_or(UNKNOWN)
}

pub fn is_known(code: i64) -> bool {
    DESCRIPTIONS.contains_key(&code)
}
