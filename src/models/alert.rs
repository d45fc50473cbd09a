use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Severity;

/// A detected pet-behavior event, as served by `GET /alerts/{id}`.
/// Mutated server-side by acknowledge/resolve; read-only here.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Alert {
    pub id: Uuid,
    pub pet_id: i32,
    #[serde(default)]
    pub pet_name: Option<String>,
    pub alert_type: String,
    pub severity_level: Severity,
    pub message: Option<String>,
    pub critical_indicators: Option<serde_json::Value>,
    pub recommended_actions: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub outcome: Option<String>,
    pub user_response: Option<String>,
    pub user_acknowledged_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_notified_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub resolved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub notification_sent: bool,
    #[serde(default)]
    pub notification_channels: Option<serde_json::Value>,
    #[serde(default)]
    pub intervention_action: Option<String>,
    #[serde(default)]
    pub video_id: Option<Uuid>,
}

impl Alert {
    pub fn is_resolved(&self) -> bool {
        self.outcome.as_deref() == Some("Resolved")
    }

    pub fn is_acknowledged(&self) -> bool {
        self.user_acknowledged_at.is_some()
    }

    /// Pet name for display, falling back to the numeric reference.
    pub fn pet_display_name(&self) -> String {
        match &self.pet_name {
            Some(name) => name.clone(),
            None => format!("Pet #{}", self.pet_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "6f1c1a9e-3d53-4f7b-9a57-2e1f5f0a1b2c",
            "pet_id": 7,
            "pet_name": "Rex",
            "alert_type": "excessive_barking",
            "severity_level": "critical",
            "message": "Rex has been barking for 20 minutes",
            "critical_indicators": {"barks_per_minute": 32},
            "recommended_actions": ["check camera"],
            "created_at": "2026-02-03T10:00:00",
            "outcome": null,
            "user_response": null,
            "user_acknowledged_at": null,
            "user_notified_at": "2026-02-03T10:00:05",
            "notification_sent": true,
            "notification_channels": {"sms": true},
            "intervention_action": "Played calming audio",
            "video_id": "bb9d9a51-77e2-4d37-a1de-6d3f4ce2a111"
        }"#
    }

    #[test]
    fn deserializes_backend_payload() {
        let alert: Alert = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(alert.severity_level, Severity::Critical);
        assert_eq!(alert.pet_display_name(), "Rex");
        assert!(!alert.is_resolved());
        assert!(!alert.is_acknowledged());
        assert!(alert.video_id.is_some());
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = r#"{
            "id": "6f1c1a9e-3d53-4f7b-9a57-2e1f5f0a1b2c",
            "pet_id": 7,
            "alert_type": "limping",
            "severity_level": "high",
            "message": null,
            "critical_indicators": null,
            "recommended_actions": null,
            "created_at": "2026-02-03T10:00:00",
            "outcome": "Resolved",
            "user_response": null,
            "user_acknowledged_at": null
        }"#;
        let alert: Alert = serde_json::from_str(raw).unwrap();
        assert!(alert.is_resolved());
        assert!(!alert.notification_sent);
        assert_eq!(alert.pet_display_name(), "Pet #7");
        assert!(alert.video_id.is_none());
    }
}
