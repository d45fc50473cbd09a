use serde::Deserialize;

use crate::error::Result;
use crate::models::DailyDigest;

use super::ApiClient;

#[derive(Deserialize)]
pub struct DigestListResponse {
    pub digests: Vec<DailyDigest>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ApiClient {
    // GET /pets/:id/digests?page&page_size
    pub async fn list_pet_digests(
        &self,
        pet_id: i32,
        page: u32,
        page_size: u32,
    ) -> Result<DigestListResponse> {
        let response = self
            .http()
            .get(self.url(&format!("/pets/{}/digests", pet_id)))
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }
}
