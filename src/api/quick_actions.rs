use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ActionType, QuickAction};

use super::ApiClient;

#[derive(Serialize)]
pub struct CreateQuickActionRequest {
    pub emergency_contact_id: i32,
    pub action_type: ActionType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_clip_ids: Option<Vec<String>>,
}

impl ApiClient {
    // POST /alerts/:alert_id/quick-actions - log and execute an outreach
    pub async fn create_quick_action(
        &self,
        alert_id: Uuid,
        payload: &CreateQuickActionRequest,
    ) -> Result<QuickAction> {
        let response = self
            .http()
            .post(self.url(&format!("/alerts/{}/quick-actions", alert_id)))
            .json(payload)
            .send()
            .await?;
        let action: QuickAction = Self::decode(response).await?;
        info!("created quick action {} for alert {}", action.id, alert_id);
        Ok(action)
    }

    // GET /alerts/:alert_id/quick-actions
    pub async fn list_alert_quick_actions(&self, alert_id: Uuid) -> Result<Vec<QuickAction>> {
        let response = self
            .http()
            .get(self.url(&format!("/alerts/{}/quick-actions", alert_id)))
            .send()
            .await?;
        Self::decode(response).await
    }
}
