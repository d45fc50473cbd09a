use serde::Serialize;

use crate::error::Result;
use crate::models::User;

use super::{ApiClient, MessageResponse};

#[derive(Serialize, Default)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiClient {
    // PATCH /users
    pub async fn update_user(&self, payload: &UpdateUserRequest) -> Result<User> {
        let response = self
            .http()
            .patch(self.url("/users"))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    // DELETE /users
    pub async fn delete_account(&self) -> Result<MessageResponse> {
        let response = self.http().delete(self.url("/users")).send().await?;
        Self::decode(response).await
    }
}
