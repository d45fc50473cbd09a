pub mod alerts;
pub mod auth;
pub mod daily_digest;
pub mod emergency_contacts;
pub mod pet;
pub mod quick_actions;
pub mod user;
pub mod video;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// Common shape of backend status/message bodies.
#[derive(Debug, serde::Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Typed client for the PetPulse REST backend. The session is a cookie,
/// so the underlying HTTP client carries a cookie store; logging out
/// drops the store by rebuilding the client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: std::time::Duration,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http(config.request_timeout)?;
        Ok(ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        })
    }

    /// Forget the session cookie. The backend has no logout endpoint; the
    /// original client simply expires the cookie locally.
    pub fn clear_session(&mut self) -> Result<()> {
        self.http = build_http(self.timeout)?;
        Ok(())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response, mapping non-2xx statuses to `ClientError::Api`.
    /// The backend reports errors either as `{"error": ...}` JSON or as a
    /// bare text body.
    pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|e| e.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        body
                    }
                });
            debug!("API call failed: {} {}", status, message);
            return Err(ClientError::Api { status, message });
        }
        Ok(response.json().await?)
    }
}

fn build_http(timeout: std::time::Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .cookie_store(true)
        .timeout(timeout)
        .build()?)
}
