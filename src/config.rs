use std::env;
use std::time::Duration;

use crate::error::{ClientError, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEBOUNCE_WINDOW_SECS: i64 = 300;

/// Client configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub debounce_window_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("PETPULSE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs: u64 = match env::var("PETPULSE_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ClientError::Config("PETPULSE_REQUEST_TIMEOUT_SECS must be a positive integer".to_string())
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let debounce_window_secs: i64 = match env::var("PETPULSE_DEBOUNCE_WINDOW_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ClientError::Config("PETPULSE_DEBOUNCE_WINDOW_SECS must be an integer".to_string())
            })?,
            Err(_) => DEFAULT_DEBOUNCE_WINDOW_SECS,
        };

        if debounce_window_secs < 0 {
            return Err(ClientError::Config(
                "PETPULSE_DEBOUNCE_WINDOW_SECS must not be negative".to_string(),
            ));
        }

        Ok(Config {
            api_base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            debounce_window_secs,
        })
    }

    /// The trailing window inside which a repeated outreach of the same type is suppressed.
    pub fn debounce_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.debounce_window_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            debounce_window_secs: DEFAULT_DEBOUNCE_WINDOW_SECS,
        }
    }
}
