use serde::Serialize;

use crate::error::Result;
use crate::models::Pet;

use super::{ApiClient, MessageResponse};

#[derive(Serialize)]
pub struct CreatePetRequest {
    pub name: String,
    pub age: i32,
    pub species: String,
    pub breed: String,
    pub bio: String,
}

#[derive(Serialize, Default)]
pub struct UpdatePetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ApiClient {
    // GET /pets
    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        let response = self.http().get(self.url("/pets")).send().await?;
        Self::decode(response).await
    }

    // POST /pets
    pub async fn create_pet(&self, payload: &CreatePetRequest) -> Result<Pet> {
        let response = self
            .http()
            .post(self.url("/pets"))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    // GET /pets/:id
    pub async fn get_pet(&self, pet_id: i32) -> Result<Pet> {
        let response = self
            .http()
            .get(self.url(&format!("/pets/{}", pet_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    // PATCH /pets/:id
    pub async fn update_pet(&self, pet_id: i32, payload: &UpdatePetRequest) -> Result<Pet> {
        let response = self
            .http()
            .patch(self.url(&format!("/pets/{}", pet_id)))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    // DELETE /pets/:id
    pub async fn delete_pet(&self, pet_id: i32) -> Result<MessageResponse> {
        let response = self
            .http()
            .delete(self.url(&format!("/pets/{}", pet_id)))
            .send()
            .await?;
        Self::decode(response).await
    }
}
