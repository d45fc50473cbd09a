use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")] Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")] Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("invalid input: {0}")] InvalidInput(String),

    #[error("configuration error: {0}")] Config(String),
}

impl ClientError {
    /// True when the backend rejected the session cookie.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ClientError::Api { status, .. } if *status == reqwest::StatusCode::UNAUTHORIZED
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
