use std::{collections::HashMap, env, fs, path::Path};
use tracing::warn;

/// Environment variable holding the WeatherAPI.com credential.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

const ENV_FILE: &str = ".env";

/// Process-wide configuration, constructed once at startup and passed by
/// reference into the provider.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// WeatherAPI.com credential. May be empty: startup still succeeds and
    /// every lookup fails with [`crate::WeatherError::Configuration`] until
    /// the key is provided.
    pub api_key: String,
}

impl Config {
    /// Read `WEATHER_API_KEY` from the process environment, falling back to
    /// a `.env` file in the working directory.
    ///
    /// The file is an overlay, not an injection: the process environment
    /// always wins, and nothing is written back into it. A missing file is
    /// logged and ignored.
    pub fn load() -> Self {
        Self::load_with_env_file(Path::new(ENV_FILE))
    }

    fn load_with_env_file(env_file: &Path) -> Self {
        let overlay = match fs::read_to_string(env_file) {
            Ok(contents) => parse_env_file(&contents),
            Err(_) => {
                warn!("No {} file found", env_file.display());
                HashMap::new()
            }
        };

        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| overlay.get(API_KEY_VAR).cloned())
            .unwrap_or_default();

        if api_key.is_empty() {
            warn!("{API_KEY_VAR} is not set; weather lookups will fail");
        }

        Self { api_key }
    }
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, keys
/// and values are trimmed, and surrounding single or double quotes are
/// stripped from values. Lines without `=` are ignored.
fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim().trim_matches('"').trim_matches('\'');
        vars.insert(key.to_string(), value.to_string());
    }

    vars
}
