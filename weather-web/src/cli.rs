use anyhow::Context;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;
use weather_core::{Config, WeatherApiProvider, WeatherProvider};

use crate::page::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Weather page server")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Path to the HTML template. It is re-read on every request, so it can
    /// be edited without restarting the server.
    #[arg(long, default_value = "index.html")]
    pub template: PathBuf,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load();
        let provider: Arc<dyn WeatherProvider> = Arc::new(WeatherApiProvider::new(&config));

        let state = Arc::new(AppState {
            provider,
            template_path: self.template,
        });
        let app = page::router(state);

        let listener = tokio::net::TcpListener::bind(self.bind)
            .await
            .with_context(|| format!("Failed to bind {}", self.bind))?;

        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, app).await.context("Server error")?;

        Ok(())
    }
}
