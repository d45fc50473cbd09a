use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::models::PetVideo;

use super::ApiClient;

#[derive(Deserialize)]
pub struct VideoListResponse {
    pub videos: Vec<PetVideo>,
    pub total: u64,
    pub page: u32,
}

impl ApiClient {
    // GET /videos?page&page_size
    pub async fn list_user_videos(&self, page: u32, page_size: u32) -> Result<VideoListResponse> {
        let response = self
            .http()
            .get(self.url("/videos"))
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    // GET /pets/:id/videos?page&per_page
    pub async fn list_pet_videos(
        &self,
        pet_id: i32,
        page: u32,
        per_page: u32,
    ) -> Result<VideoListResponse> {
        let response = self
            .http()
            .get(self.url(&format!("/pets/{}/videos", pet_id)))
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;
        Self::decode(response).await
    }

    // GET /videos/:id/stream - the raw clip, for playback or share attachment
    pub async fn stream_video(&self, video_id: Uuid) -> Result<Vec<u8>> {
        let response = self
            .http()
            .get(self.url(&format!("/videos/{}/stream", video_id)))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status,
                message: if message.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    message
                },
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
