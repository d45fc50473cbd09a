use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Alert, Severity};

use super::{ApiClient, StatusResponse};

#[derive(Deserialize)]
pub struct AlertListResponse {
    pub alerts: Vec<Alert>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Serialize)]
pub struct AcknowledgeRequest {
    pub response: String,
}

impl ApiClient {
    // GET /alerts?page&page_size[&severity_level]
    pub async fn list_user_alerts(
        &self,
        page: u32,
        page_size: u32,
        severity: Option<Severity>,
    ) -> Result<AlertListResponse> {
        let mut request = self
            .http()
            .get(self.url("/alerts"))
            .query(&[("page", page), ("page_size", page_size)]);
        if let Some(severity) = severity {
            request = request.query(&[("severity_level", severity.as_str())]);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    // GET /pets/:id/alerts?page&page_size[&severity_level]
    pub async fn list_pet_alerts(
        &self,
        pet_id: i32,
        page: u32,
        page_size: u32,
        severity: Option<Severity>,
    ) -> Result<AlertListResponse> {
        let mut request = self
            .http()
            .get(self.url(&format!("/pets/{}/alerts", pet_id)))
            .query(&[("page", page), ("page_size", page_size)]);
        if let Some(severity) = severity {
            request = request.query(&[("severity_level", severity.as_str())]);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    // GET /alerts/:id
    pub async fn get_alert(&self, alert_id: Uuid) -> Result<Alert> {
        let response = self
            .http()
            .get(self.url(&format!("/alerts/{}", alert_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    // POST /alerts/:id/acknowledge
    pub async fn acknowledge_alert(
        &self,
        alert_id: Uuid,
        user_response: &str,
    ) -> Result<StatusResponse> {
        let payload = AcknowledgeRequest {
            response: user_response.to_string(),
        };
        let response = self
            .http()
            .post(self.url(&format!("/alerts/{}/acknowledge", alert_id)))
            .json(&payload)
            .send()
            .await?;
        let status: StatusResponse = Self::decode(response).await?;
        info!("acknowledged alert {}", alert_id);
        Ok(status)
    }

    // POST /alerts/:id/resolve
    pub async fn resolve_alert(&self, alert_id: Uuid) -> Result<StatusResponse> {
        let response = self
            .http()
            .post(self.url(&format!("/alerts/{}/resolve", alert_id)))
            .send()
            .await?;
        let status: StatusResponse = Self::decode(response).await?;
        info!("resolved alert {}", alert_id);
        Ok(status)
    }
}
