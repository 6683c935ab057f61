use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::{path::PathBuf, sync::Arc};
use tracing::error;
use weather_core::WeatherProvider;

use crate::template;

/// City used when the query parameter is absent or empty.
const DEFAULT_CITY: &str = "Moscow";

/// Shared, immutable per-process state. Requests never mutate it, so
/// serving them in parallel needs no coordination.
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub template_path: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    city: Option<String>,
}

/// Handle `GET /`: resolve the city, fetch the temperature, render the page.
///
/// Any failure ends the request with a single 500 carrying the error text;
/// the template is never rendered after a failed fetch.
async fn index(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    let city = query
        .city
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    let report = match state.provider.current(&city).await {
        Ok(report) => report,
        Err(err) => {
            error!(%city, "weather lookup failed: {err}");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    match template::render_index(&state.template_path, &report).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            error!(%city, "page rendering failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
