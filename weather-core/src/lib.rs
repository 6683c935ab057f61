//! Core library for the weather page server.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The error taxonomy shared with the HTTP frontend
//! - Shared domain models and the WeatherAPI.com client
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherReport;
pub use provider::{WeatherApiProvider, WeatherProvider};
