use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use meteo_core::{City, OpenMeteoProvider, pipeline};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-cli",
    version,
    about = "A simple CLI to fetch current weather data"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get current weather for given coordinates.
    Get {
        /// Latitude in decimal degrees, -90..=90.
        #[arg(allow_hyphen_values = true)]
        latitude: String,

        /// Longitude in decimal degrees, -180..=180.
        #[arg(allow_hyphen_values = true)]
        longitude: String,

        /// Name shown in the report header.
        location: Option<String>,
    },

    /// Get weather for New York.
    NewYork,

    /// Get weather for London.
    London,

    /// Get weather for Tokyo.
    Tokyo,

    /// Get weather for Sydney.
    Sydney,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Some(command) = self.command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        debug!(?command, "dispatching");
        let provider = OpenMeteoProvider::default();

        let report = match command {
            Command::Get { latitude, longitude, location } => {
                pipeline::get_weather(&provider, &latitude, &longitude, location.as_deref())
                    .await?
            }
            Command::NewYork => pipeline::run(&provider, &City::NewYork.coordinates()).await?,
            Command::London => pipeline::run(&provider, &City::London.coordinates()).await?,
            Command::Tokyo => pipeline::run(&provider, &City::Tokyo.coordinates()).await?,
            Command::Sydney => pipeline::run(&provider, &City::Sydney.coordinates()).await?,
        };

        print!("{report}");
        Ok(())
    }
}
