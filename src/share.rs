//! Client-side share affordances: WhatsApp and mailto deep links built
//! from the contact's details and the composed message, plus a share
//! payload that carries the alert video when it can be fetched.

use std::fmt;

use tracing::warn;
use urlencoding::encode;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::models::{Alert, EmergencyContact};
use crate::templates::MessageTemplates;

pub fn whatsapp_link(phone: &str, text: &str) -> String {
    // wa.me only accepts the number in international digits
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, encode(text))
}

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        encode(subject),
        encode(body)
    )
}

#[derive(Clone)]
pub struct VideoAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for VideoAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoAttachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Everything a share sheet needs for one alert: title, message text, the
/// contact's reachable endpoints and, best-effort, the evidence video.
#[derive(Debug, Clone)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub video: Option<VideoAttachment>,
}

impl SharePayload {
    /// Assemble the payload. A failed video fetch is logged and the share
    /// proceeds text-only; it never fails the flow.
    pub async fn build(
        api: &ApiClient,
        alert: &Alert,
        contact: Option<&EmergencyContact>,
        text: &str,
    ) -> SharePayload {
        let video = match alert.video_id {
            Some(video_id) => fetch_attachment(api, video_id, alert.id).await,
            None => None,
        };

        SharePayload {
            title: MessageTemplates::share_title(&alert.alert_type),
            text: text.to_string(),
            phone: contact.map(|c| c.phone.clone()),
            email: contact
                .filter(|c| c.has_email())
                .and_then(|c| c.email.clone()),
            video,
        }
    }

    /// Email share requires the contact to actually have an address.
    pub fn email_available(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    pub fn whatsapp_url(&self) -> Option<String> {
        self.phone.as_ref().map(|phone| whatsapp_link(phone, &self.text))
    }

    pub fn mailto_url(&self) -> Option<String> {
        if !self.email_available() {
            return None;
        }
        self.email
            .as_ref()
            .map(|email| mailto_link(email, &self.title, &self.text))
    }
}

async fn fetch_attachment(api: &ApiClient, video_id: Uuid, alert_id: Uuid) -> Option<VideoAttachment> {
    match api.stream_video(video_id).await {
        Ok(bytes) => Some(VideoAttachment {
            file_name: format!("alert_{}.mp4", alert_id),
            bytes,
        }),
        Err(e) => {
            warn!("failed to fetch video {} for sharing: {}", video_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_strips_formatting_and_encodes_text() {
        let url = whatsapp_link("+1 (555) 123-4567", "🚨 URGENT: check PetPulse now");
        assert!(url.starts_with("https://wa.me/15551234567?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("URGENT"));
    }

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let url = mailto_link("vet@example.com", "PetPulse Alert: limping", "Please call & advise");
        assert!(url.starts_with("mailto:vet@example.com?subject="));
        assert!(url.contains("PetPulse%20Alert%3A%20limping"));
        assert!(url.contains("%26")); // the ampersand must not split the query
    }

    #[test]
    fn email_availability_requires_a_nonempty_address() {
        let payload = SharePayload {
            title: "t".to_string(),
            text: "m".to_string(),
            phone: Some("+15551234567".to_string()),
            email: Some(String::new()),
            video: None,
        };
        assert!(!payload.email_available());
        assert!(payload.mailto_url().is_none());
        assert!(payload.whatsapp_url().is_some());
    }
}
