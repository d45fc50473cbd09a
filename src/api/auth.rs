use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::User;

use super::{ApiClient, MessageResponse};

#[derive(Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisteredUser {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl ApiClient {
    // POST /register
    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisteredUser> {
        let response = self
            .http()
            .post(self.url("/register"))
            .json(payload)
            .send()
            .await?;
        let user: RegisteredUser = Self::decode(response).await?;
        info!("registered user {}", user.id);
        Ok(user)
    }

    // POST /login - on success the session cookie lands in the cookie store
    pub async fn login(&self, payload: &LoginRequest) -> Result<MessageResponse> {
        let response = self
            .http()
            .post(self.url("/login"))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    // GET /users - profile of the cookie session's user
    pub async fn get_user(&self) -> Result<User> {
        let response = self.http().get(self.url("/users")).send().await?;
        Self::decode(response).await
    }
}
