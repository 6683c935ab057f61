use minijinja::{Environment, context};
use std::path::Path;
use thiserror::Error;
use weather_core::WeatherReport;

/// Name the page template is registered under.
pub const TEMPLATE_NAME: &str = "index";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to load template: {0}")]
    Load(#[from] std::io::Error),

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Render the page for one request.
///
/// The template file is read and parsed on every call, so edits to it take
/// effect without a restart. It exposes two substitution points: `city` and
/// `temp_c`.
pub async fn render_index(path: &Path, report: &WeatherReport) -> Result<String, TemplateError> {
    let source = tokio::fs::read_to_string(path).await?;

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, &source)?;

    let page = env.get_template(TEMPLATE_NAME)?.render(context! {
        city => &report.city,
        temp_c => report.temperature_c,
    })?;

    Ok(page)
}
