use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{CustomUserError, InquireError, Select, Text, validator::Validation};
use skycast_core::{Config, ForecastService, LocationSummary, ViewState, fetcher_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Seven-day weather forecast for Negros Occidental")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available locations.
    List,

    /// Show the forecast for a location.
    Show {
        /// Location id, e.g. "isabela". Defaults to the configured location.
        location: Option<String>,

        /// Print the forecast as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Pick locations interactively and show their forecasts.
    Browse,

    /// Choose the default location and provider timezone.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::List => {
                let registry = config.registry()?;
                for loc in registry.list_all() {
                    println!("{:<16} {}", loc.id, loc.name);
                }
            }
            Command::Show { location, json } => {
                let service = build_service(&config)?;
                let id = match location {
                    Some(id) => id,
                    None => config.default_location_id(service.registry())?,
                };
                tracing::debug!(location = %id, json, "showing forecast");

                let forecast = service
                    .get_forecast(&id)
                    .await
                    .context("Cannot show forecast.\nHint: run `skycast list` to see valid ids.")?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&forecast)?);
                } else {
                    print!("{}", render::forecast_report(&forecast));
                }
            }
            Command::Browse => browse(&config).await?,
            Command::Configure => configure(config)?,
        }

        Ok(())
    }
}

fn build_service(config: &Config) -> Result<ForecastService> {
    Ok(ForecastService::new(config.registry()?, fetcher_from_config(config)))
}

/// Wraps a registry entry for display in an `inquire` picker.
struct Choice(LocationSummary);

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.name)
    }
}

fn choices(locations: Vec<LocationSummary>) -> Vec<Choice> {
    locations.into_iter().map(Choice).collect()
}

fn starting_cursor(locations: &[Choice], id: &str) -> usize {
    locations.iter().position(|c| c.0.id == id).unwrap_or(0)
}

async fn browse(config: &Config) -> Result<()> {
    let service = build_service(config)?;
    let mut current = config.default_location_id(service.registry())?;
    let mut state = ViewState::default();

    loop {
        let options = choices(service.locations());
        let cursor = starting_cursor(&options, &current);

        let picked = match Select::new("Select municipality:", options)
            .with_starting_cursor(cursor)
            .prompt()
        {
            Ok(choice) => choice.0.id,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Location prompt failed"),
        };

        tracing::debug!(location = %picked, "location selected");
        let request = state.select(&picked);
        print!("{}", render::view(&state));

        let result = service.get_forecast(&picked).await;
        state.finish(request, result);
        print!("{}", render::view(&state));

        current = picked;
    }

    Ok(())
}

fn validate_timezone(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Timezone cannot be empty".into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn configure(mut config: Config) -> Result<()> {
    let registry = config.registry()?;
    let options = choices(registry.list_all());
    let current = config.default_location_id(&registry)?;
    let cursor = starting_cursor(&options, &current);

    let picked = Select::new("Default municipality:", options)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Location prompt failed")?;

    let timezone = Text::new("Provider timezone:")
        .with_default(config.timezone())
        .with_help_message("IANA zone name, e.g. Asia/Manila")
        .with_validator(validate_timezone)
        .prompt()
        .context("Timezone prompt failed")?;

    config.set_default_location(&picked.0.id);
    config.timezone = Some(timezone.trim().to_string());
    config.save()?;

    println!(
        "Saved default location '{}' to {}",
        picked.0.id,
        Config::config_file_path()?.display()
    );

    Ok(())
}
