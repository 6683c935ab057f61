use thiserror::Error;

/// Failures a weather lookup can produce.
///
/// All variants are local to a single request: nothing is retried and no
/// failure affects other in-flight or future requests.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The credential is absent or empty. Raised before any network I/O.
    #[error("API key is not set")]
    Configuration,

    /// The outbound call failed at the transport level (connection refused,
    /// DNS, interrupted body). No timeout is configured.
    #[error("request to weather API failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("weather API request failed with status {status}: {body}")]
    ApiStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON. Missing fields are *not* an
    /// error; they decode to zero (see [`crate::model::CurrentPayload`]).
    #[error("failed to decode weather API response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_the_missing_key() {
        let msg = WeatherError::Configuration.to_string();
        assert_eq!(msg, "API key is not set");
    }

    #[test]
    fn decode_error_wraps_serde_json() {
        let inner = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = WeatherError::from(inner);
        assert!(err.to_string().starts_with("failed to decode weather API response"));
    }
}
