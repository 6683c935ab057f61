use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    Config, WeatherError, WeatherReport,
    model::CurrentPayload,
};

use super::WeatherProvider;

const BASE_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// Client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a stand-in endpoint.
    #[cfg(test)]
    fn with_base_url(config: &Config, base_url: impl Into<String>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Query parameters of the outbound call: the credential, the city
    /// forwarded verbatim (URL encoding only), and the flag switching off
    /// air-quality data that is never read.
    fn query_params<'a>(&'a self, city: &'a str) -> [(&'static str, &'a str); 3] {
        [("key", self.api_key.as_str()), ("q", city), ("aqi", "no")]
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::Configuration);
        }

        debug!(%city, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&self.query_params(city))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::ApiStatus {
                status,
                body: truncate_body(&body),
            });
        }

        let payload: CurrentPayload = serde_json::from_str(&body)?;

        Ok(WeatherReport {
            city: city.to_owned(),
            temperature_c: payload.current.temp_c,
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Cut on a char boundary; byte 200 may fall inside a multi-byte char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_key(key: &str) -> WeatherApiProvider {
        WeatherApiProvider::new(&Config { api_key: key.to_string() })
    }

    #[tokio::test]
    async fn empty_credential_fails_before_any_network_io() {
        let provider = provider_with_key("");

        let err = provider.current("Moscow").await.unwrap_err();
        assert!(matches!(err, WeatherError::Configuration));
    }

    #[test]
    fn query_carries_key_city_and_aqi_flag() {
        let provider = provider_with_key("KEY");

        let params = provider.query_params("Oslo");
        assert_eq!(params, [("key", "KEY"), ("q", "Oslo"), ("aqi", "no")]);
    }

    #[test]
    fn city_is_url_encoded_in_the_query_string() {
        let provider = provider_with_key("KEY");

        // reqwest's `.query()` uses the same form encoding as Url here.
        let url = reqwest::Url::parse_with_params(BASE_URL, provider.query_params("New York"))
            .expect("base url is valid");

        assert_eq!(url.query(), Some("key=KEY&q=New+York&aqi=no"));
    }

    #[test]
    fn long_upstream_error_bodies_are_truncated() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncation_never_splits_a_multibyte_char() {
        // 199 ASCII bytes, then two-byte chars spanning the cut-off point.
        let body = format!("{}{}", "x".repeat(199), "é".repeat(20));

        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(199)));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_status_error() {
        use axum::{Router, http::StatusCode, routing::get};

        let app = Router::new().route(
            "/",
            get(|| async { (StatusCode::FORBIDDEN, "API key has been disabled.") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        let provider = WeatherApiProvider::with_base_url(
            &Config { api_key: "KEY".to_string() },
            format!("http://{addr}/"),
        );

        let err = provider.current("Oslo").await.unwrap_err();
        match err {
            WeatherError::ApiStatus { status, body } => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
                assert_eq!(body, "API key has been disabled.");
            }
            other => panic!("expected ApiStatus, got {other:?}"),
        }
    }
}
