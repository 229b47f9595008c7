use colored::Colorize;

use crate::{codes::describe, model::WeatherSummary};

/// Render the terminal report for `label`.
///
/// Layout is fixed: header, current conditions, then today's forecast.
pub fn render(label: &str, summary: &WeatherSummary) -> String {
    let lines = [
        String::new(),
        format!("📍 Weather for {label}").as_str().bold().cyan().to_string(),
        String::new(),
        "Current Weather:".bold().to_string(),
        format!("  Temperature: {}", celsius(summary.temperature).as_str().yellow()),
        format!("  Feels Like: {}", celsius(summary.feels_like).as_str().yellow()),
        format!("  Condition: {}", describe(summary.current_code)),
        format!("  Wind Speed: {} km/h", summary.wind_speed),
        format!("  Humidity: {}%", summary.humidity),
        String::new(),
        "Today's Forecast:".bold().to_string(),
        format!("  High: {}", celsius(summary.today_max).as_str().red()),
        format!("  Low: {}", celsius(summary.today_min).as_str().blue()),
        format!("  Condition: {}", describe(summary.today_code)),
        String::new(),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn celsius(value: f64) -> String {
    format!("{value}°C")
}
