use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{ContactType, EmergencyContact};

use super::{ApiClient, MessageResponse};

#[derive(Serialize)]
pub struct CreateEmergencyContactRequest {
    pub contact_type: ContactType,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[derive(Serialize, Default)]
pub struct UpdateEmergencyContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApiClient {
    // GET /emergency-contacts
    pub async fn list_emergency_contacts(&self) -> Result<Vec<EmergencyContact>> {
        let response = self
            .http()
            .get(self.url("/emergency-contacts"))
            .send()
            .await?;
        Self::decode(response).await
    }

    // POST /emergency-contacts
    pub async fn create_emergency_contact(
        &self,
        payload: &CreateEmergencyContactRequest,
    ) -> Result<EmergencyContact> {
        let response = self
            .http()
            .post(self.url("/emergency-contacts"))
            .json(payload)
            .send()
            .await?;
        let contact: EmergencyContact = Self::decode(response).await?;
        info!("created emergency contact {}", contact.id);
        Ok(contact)
    }

    // PATCH /emergency-contacts/:id
    pub async fn update_emergency_contact(
        &self,
        contact_id: i32,
        payload: &UpdateEmergencyContactRequest,
    ) -> Result<EmergencyContact> {
        let response = self
            .http()
            .patch(self.url(&format!("/emergency-contacts/{}", contact_id)))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    // DELETE /emergency-contacts/:id
    pub async fn delete_emergency_contact(&self, contact_id: i32) -> Result<MessageResponse> {
        let response = self
            .http()
            .delete(self.url(&format!("/emergency-contacts/{}", contact_id)))
            .send()
            .await?;
        let message = Self::decode(response).await?;
        info!("deleted emergency contact {}", contact_id);
        Ok(message)
    }
}
