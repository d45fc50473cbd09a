use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActionStatus, MessageBody};

/// A logged or pending outreach attempt tied to one alert and one contact.
/// The backend denormalizes the contact name/phone into the response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuickAction {
    pub id: Uuid,
    pub alert_id: Uuid,
    pub emergency_contact_id: i32,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    pub action_type: String,
    pub message: String,
    pub video_clips: Option<serde_json::Value>,
    pub status: ActionStatus,
    pub sent_at: Option<NaiveDateTime>,
    pub acknowledged_at: Option<NaiveDateTime>,
    pub error_message: Option<String>,
    pub created_at: NaiveDateTime,
}

impl QuickAction {
    pub fn is_pending(&self) -> bool {
        self.status == ActionStatus::Pending
    }

    /// Action types are free strings on the wire; comparisons ignore case.
    pub fn matches_type(&self, action_type: &str) -> bool {
        self.action_type.eq_ignore_ascii_case(action_type)
    }

    /// The timestamp that counts for debouncing and the audit feed.
    pub fn effective_timestamp(&self) -> NaiveDateTime {
        self.sent_at.unwrap_or(self.created_at)
    }

    pub fn body(&self) -> MessageBody {
        MessageBody::parse(&self.message)
    }

    /// Human-readable rendering of the body: prefer the SMS variant of a
    /// structured suggestion, else the raw text.
    pub fn display_message(&self) -> String {
        match self.body() {
            MessageBody::Structured(parsed) if !parsed.sms_text.is_empty() => parsed.sms_text,
            _ => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample(status: ActionStatus, message: &str) -> QuickAction {
        QuickAction {
            id: Uuid::new_v4(),
            alert_id: Uuid::new_v4(),
            emergency_contact_id: 1,
            contact_name: "Dana".to_string(),
            contact_phone: "+15551234567".to_string(),
            action_type: "sms".to_string(),
            message: message.to_string(),
            video_clips: None,
            status,
            sent_at: None,
            acknowledged_at: None,
            error_message: None,
            created_at: NaiveDate::from_ymd_opt(2026, 2, 3)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn effective_timestamp_prefers_sent_at() {
        let mut action = sample(ActionStatus::Sent, "hi");
        assert_eq!(action.effective_timestamp(), action.created_at);

        let sent = action.created_at + chrono::Duration::minutes(2);
        action.sent_at = Some(sent);
        assert_eq!(action.effective_timestamp(), sent);
    }

    #[test]
    fn display_message_prefers_sms_variant() {
        let action = sample(
            ActionStatus::Sent,
            r#"{"sms_text":"Call now","email_body":"Longer email"}"#,
        );
        assert_eq!(action.display_message(), "Call now");

        let plain = sample(ActionStatus::Sent, "just text");
        assert_eq!(plain.display_message(), "just text");
    }

    #[test]
    fn type_match_ignores_case() {
        let action = sample(ActionStatus::Sent, "hi");
        assert!(action.matches_type("SMS"));
        assert!(!action.matches_type("email"));
    }
}
