use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use forecast_core::{
    Config, Endpoint, UnitSystem,
    bucket::{bucket, today_key},
    codec,
};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Forecast views from weather provider responses")]
pub struct Cli {
    /// Log decoding and bucketing details to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set location, language, API key, units and list sizes.
    Configure,

    /// Show current conditions and forecasts from saved provider responses.
    Show {
        /// Current weather response, JSON file or `-` for stdin.
        #[arg(long)]
        current: Option<PathBuf>,

        /// 3-hour forecast response, JSON file or `-` for stdin.
        #[arg(long)]
        forecast: Option<PathBuf>,

        /// Print the full date on every daily row.
        #[arg(long)]
        full_date: bool,

        /// Override the configured unit system ("metric" or "imperial").
        #[arg(long)]
        units: Option<String>,
    },

    /// Print the provider request URL for an endpoint ("current" or "forecast").
    RequestUrl {
        endpoint: String,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { current, forecast, full_date, units } => {
                show(current.as_deref(), forecast.as_deref(), full_date, units.as_deref())
            }
            Command::RequestUrl { endpoint } => {
                let endpoint = Endpoint::try_from(endpoint.as_str())?;
                println!("{}", Config::load()?.request_url(endpoint)?);
                Ok(())
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.location = Text::new("Location:").with_default(&config.location).prompt()?;
    config.language = Text::new("Language code:").with_default(&config.language).prompt()?;

    let api_key = Text::new("Provider API key (leave empty to skip):")
        .with_default(config.api_key.as_deref().unwrap_or_default())
        .prompt()?;
    config.api_key = Some(api_key.trim().to_string()).filter(|key| !key.is_empty());

    let starting = UnitSystem::all().iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Units:", UnitSystem::all().to_vec())
        .with_starting_cursor(starting)
        .prompt()?;

    config.hourly_cap = CustomType::<usize>::new("Hourly forecasts to show:")
        .with_default(config.hourly_cap)
        .with_error_message("Please enter a whole number")
        .prompt()?;
    config.daily_cap = CustomType::<usize>::new("Days to show:")
        .with_default(config.daily_cap)
        .with_error_message("Please enter a whole number")
        .prompt()?;

    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn show(
    current: Option<&Path>,
    forecast: Option<&Path>,
    full_date: bool,
    units: Option<&str>,
) -> Result<()> {
    if current.is_none() && forecast.is_none() {
        bail!(
            "Nothing to show.\n\
             Hint: pass `--current <file>` and/or `--forecast <file>` with a saved provider response."
        );
    }
    if current.is_some_and(is_stdin) && forecast.is_some_and(is_stdin) {
        bail!("Only one of `--current` and `--forecast` can read from stdin.");
    }

    let mut config = Config::load()?;

    let units = match units {
        Some(s) => UnitSystem::try_from(s)?,
        None => config.units,
    };
    let now = Utc::now();

    if let Some(path) = current {
        let raw = read_payload(path)?;
        let conditions = codec::decode_current(&raw).with_context(|| {
            format!("Failed to decode current conditions from {}", path.display())
        })?;

        config.record_daylight(&conditions);
        config.save()?;
        tracing::debug!(
            sunrise_hour = config.sunrise_hour,
            sunset_hour = config.sunset_hour,
            "stored daylight hours"
        );

        print!("{}", view::render_current(&conditions, units, now, &config.labels));
    }

    // After a --current payload the hours were just refreshed.
    config.validate()?;

    if let Some(path) = forecast {
        let raw = read_payload(path)?;
        let points = codec::decode_forecast_series(&raw).with_context(|| {
            format!("Failed to decode forecast series from {}", path.display())
        })?;

        let bundle = bucket(&points, config.bucket_config(), &today_key(now));

        print!("{}", view::render_hourly(&bundle.hourly));
        print!("{}", view::render_daily(&bundle, now, full_date, &config.labels));
    }

    println!("Daylight: {}", config.daylight_window(now));
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_payload(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("Failed to read payload from stdin")?;
        return Ok(raw);
    }

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))
}
