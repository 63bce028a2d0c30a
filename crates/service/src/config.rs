//! Application configuration
//!
//! Environment-driven settings with sensible defaults. Invalid values are
//! logged and replaced by their defaults rather than aborting startup.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use analytics::forecast::{ModelKind, DEFAULT_POLYNOMIAL_DEGREE};

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Upstream job feed endpoint
    pub job_data_api_url: String,
    /// Upstream request timeout
    pub api_timeout: Duration,
    /// Whether the trends cache stores anything
    pub cache_enabled: bool,
    /// Trends cache entry lifetime
    pub cache_ttl: Duration,
    /// Which regression model `/predict` runs
    pub model_type: ModelKind,
    /// Degree for the polynomial model
    pub polynomial_degree: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            job_data_api_url: "https://api.example.com/job-data".to_string(),
            api_timeout: Duration::from_secs(30),
            cache_enabled: true,
            cache_ttl: Duration::from_secs(300),
            model_type: ModelKind::Linear,
            polynomial_degree: DEFAULT_POLYNOMIAL_DEGREE,
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment
    ///
    /// Recognized variables: `API_HOST`, `API_PORT`, `JOB_DATA_API_URL`,
    /// `API_TIMEOUT` (seconds), `CACHE_ENABLED`, `CACHE_TTL` (seconds),
    /// `MODEL_TYPE`, `POLYNOMIAL_DEGREE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: parsed_var("API_PORT", defaults.port),
            job_data_api_url: env::var("JOB_DATA_API_URL").unwrap_or(defaults.job_data_api_url),
            api_timeout: Duration::from_secs(parsed_var(
                "API_TIMEOUT",
                defaults.api_timeout.as_secs(),
            )),
            cache_enabled: bool_var("CACHE_ENABLED", defaults.cache_enabled),
            cache_ttl: Duration::from_secs(parsed_var("CACHE_TTL", defaults.cache_ttl.as_secs())),
            model_type: parsed_var("MODEL_TYPE", defaults.model_type),
            polynomial_degree: parsed_var("POLYNOMIAL_DEGREE", defaults.polynomial_degree),
        }
    }
}

/// Parse an env var, falling back to the default with a warning
fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(name, value = %raw, "invalid configuration value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Booleans accept any casing of "true"/"false"
fn bool_var(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => {
                tracing::warn!(name, value = %raw, "invalid boolean value, using default");
                default
            }
        },
        Err(_) => default,
    }
}
