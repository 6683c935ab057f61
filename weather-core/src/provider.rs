use crate::{WeatherError, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of current weather observations.
///
/// The page handler depends on this trait rather than on the concrete
/// client, so tests can inject a fake that never touches the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the current temperature for `city`.
    ///
    /// Exactly one outbound call per invocation; a failure is not retried.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
