//! Explicit session state. The authenticated user is held here and passed
//! down to whatever needs it; initialization happens once at startup and
//! teardown on logout. The transport-level session itself is the backend
//! cookie inside the `ApiClient`.

use tracing::{debug, info};

use crate::api::auth::{LoginRequest, RegisterRequest};
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::User;

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Session { user: None }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Startup probe: adopt an existing cookie session if the backend
    /// still honors it. A rejection just leaves the session signed out.
    pub async fn initialize(&mut self, api: &ApiClient) {
        match api.get_user().await {
            Ok(user) => {
                debug!("resumed session for user {}", user.id);
                self.user = Some(user);
            }
            Err(e) => {
                debug!("no resumable session: {}", e);
                self.user = None;
            }
        }
    }

    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) -> Result<()> {
        api.login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;
        let user = api.get_user().await?;
        info!("logged in as user {}", user.id);
        self.user = Some(user);
        Ok(())
    }

    /// Register then sign straight in, as the original flow does.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<()> {
        api.register(&RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        })
        .await?;
        self.login(api, email, password).await
    }

    /// Re-fetch the profile (after a profile edit). A failure clears the
    /// user, matching the original context's behavior.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<()> {
        match api.get_user().await {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                self.user = None;
                Err(e)
            }
        }
    }

    pub fn logout(&mut self, api: &mut ApiClient) -> Result<()> {
        api.clear_session()?;
        self.user = None;
        info!("logged out");
        Ok(())
    }
}
