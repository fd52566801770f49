//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - Configuration & credential checks
//! - The OpenWeather "current weather" client behind a provider trait
//! - The lookup controller and its request state
//! - Icon selection and a toolkit-independent view model
//!
//! It is used by `weather-lookup-cli`, but any front end can drive the controller and render
//! [`View`] its own way.

pub mod config;
pub mod controller;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use controller::{SubmitOutcome, WeatherLookupController};
pub use error::{ErrorKind, LookupError};
pub use icon::WeatherIcon;
pub use model::{RequestState, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use view::{ResultPanel, View};
