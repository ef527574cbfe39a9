//! Service configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    /// `None` when no API key is set; every request then takes the fallback path.
    pub gemini: Option<GeminiConfig>,
    pub cors_allow_origin: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Optional:
    /// - `BIND_ADDR`: listen address (default "0.0.0.0:5000")
    /// - `PORT`: shorthand for `0.0.0.0:{PORT}` when `BIND_ADDR` is unset
    /// - `GEMINI_API_KEY`: enables the model client
    /// - `GEMINI_MODEL`: model name (default "gemini-1.5-flash")
    /// - `GEMINI_BASE_URL`: REST base URL
    /// - `GEMINI_TIMEOUT_SECS`: request timeout (default 60)
    /// - `CORS_ALLOW_ORIGIN`: allowed origin (default "*")
    pub fn new_from_env() -> Result<Self, AppError> {
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(addr) if !addr.trim().is_empty() => addr.trim().to_string(),
            _ => match env::var("PORT") {
                Ok(port) => {
                    let port: u16 = port
                        .trim()
                        .parse()
                        .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", port)))?;
                    format!("0.0.0.0:{}", port)
                }
                Err(_) => DEFAULT_BIND_ADDR.to_string(),
            },
        };

        let gemini = env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|api_key| {
                let model = env::var("GEMINI_MODEL")
                    .ok()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
                let base_url = env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string();
                let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS);

                GeminiConfig {
                    api_key,
                    model,
                    base_url,
                    timeout: Duration::from_secs(timeout_secs),
                }
            });

        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN")
            .ok()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| "*".to_string());

        match &gemini {
            Some(g) => tracing::info!(
                bind_addr = %bind_addr,
                model = %g.model,
                base_url = %g.base_url,
                timeout_secs = g.timeout.as_secs(),
                cors = %cors_allow_origin,
                "configuration loaded"
            ),
            None => tracing::warn!(
                bind_addr = %bind_addr,
                cors = %cors_allow_origin,
                "GEMINI_API_KEY is not set, serving fallback courses only"
            ),
        }

        Ok(Self {
            bind_addr,
            gemini,
            cors_allow_origin,
        })
    }
}
