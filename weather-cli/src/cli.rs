use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_lookup_core::{
    Config, LookupError, RequestState, SubmitOutcome, View, WeatherLookupController,
    provider_from_config,
};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "London" or "New York".
        city: String,
    },

    /// Prompt for city names until cancelled (default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => {
                let controller = controller()?;
                controller.set_query(city);

                let outcome = submit_with_progress(&controller).await;
                print!("{}", render(&controller.state()));

                Ok(match outcome {
                    SubmitOutcome::Succeeded(_) => ExitCode::SUCCESS,
                    _ => ExitCode::FAILURE,
                })
            }
            Command::Interactive => {
                let controller = controller()?;
                interactive(&controller).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn controller() -> anyhow::Result<WeatherLookupController> {
    let config = Config::load()?.with_env_overrides();
    debug!(base_url = %config.base_url, has_key = config.has_credential(), "config loaded");

    let provider = provider_from_config(&config);
    Ok(WeatherLookupController::new(config, provider))
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt();

    let key = match key {
        Ok(key) => key,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Failed to read API key"),
    };

    config.set_api_key(&key);
    if !config.has_credential() {
        let rejected = RequestState::Failed(LookupError::Configuration);
        print!("{}", render(&rejected));
        return Ok(ExitCode::FAILURE);
    }

    let path = config.save()?;
    println!("Saved API key to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn interactive(controller: &WeatherLookupController) -> anyhow::Result<()> {
    loop {
        let city = Text::new("City name:")
            .with_placeholder("e.g., London, New York, Delhi")
            .with_initial_value(&controller.query())
            .prompt();

        let city = match city {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        controller.set_query(city);
        submit_with_progress(controller).await;
        print!("{}", render(&controller.state()));
    }
}

/// Submit and print the progress label while the request is in flight.
async fn submit_with_progress(controller: &WeatherLookupController) -> SubmitOutcome {
    let mut states = controller.subscribe();
    let submit = controller.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            outcome = &mut submit => return outcome,
            Ok(()) = states.changed() => {
                if let View::Loading { label } = View::from_state(&controller.state()) {
                    println!("{label}");
                }
            }
        }
    }
}
