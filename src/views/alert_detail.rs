//! State of the alert detail page: the alert, the user's emergency
//! contacts, the alert's quick actions and the composer, plus the flows
//! that tie them together (acknowledge, resolve, send, share).
//!
//! Fetches are never cancelled; instead every fetch captures the alert id
//! at request start, and results are applied through guards that drop a
//! late response for an alert the view has moved away from.

use chrono::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::quick_actions::CreateQuickActionRequest;
use crate::api::ApiClient;
use crate::composer::Composer;
use crate::dispatch;
use crate::error::{ClientError, Result};
use crate::models::{ActionType, Alert, EmergencyContact, Platform, QuickAction};
use crate::share::SharePayload;
use crate::timeline::{self, TimelineEntry};

#[derive(Debug)]
pub enum SendOutcome {
    /// The backend logged and dispatched the action.
    Sent(QuickAction),
    /// An equivalent action already went out within the debounce window;
    /// nothing was sent. Surface as a notice, not an error.
    Suppressed,
}

#[derive(Debug, Clone)]
pub struct AlertDetailView {
    alert_id: Uuid,
    pub alert: Option<Alert>,
    pub contacts: Vec<EmergencyContact>,
    pub actions: Vec<QuickAction>,
    pub composer: Composer,
    debounce_window: Duration,
}

impl AlertDetailView {
    pub fn new(alert_id: Uuid, debounce_window: Duration) -> Self {
        AlertDetailView {
            alert_id,
            alert: None,
            contacts: Vec::new(),
            actions: Vec::new(),
            composer: Composer::new(),
            debounce_window,
        }
    }

    pub fn alert_id(&self) -> Uuid {
        self.alert_id
    }

    /// Move to another alert. All per-alert state is reset; responses
    /// still in flight for the old alert will be dropped by the guards.
    pub fn select_alert(&mut self, alert_id: Uuid) {
        if alert_id != self.alert_id {
            *self = AlertDetailView::new(alert_id, self.debounce_window);
        }
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<()> {
        let requested = self.alert_id;
        let alert = api.get_alert(requested).await?;
        self.apply_alert(requested, alert);

        let contacts = api.list_emergency_contacts().await?;
        self.apply_contacts(contacts);

        let actions = api.list_alert_quick_actions(requested).await?;
        self.apply_actions(requested, actions);
        Ok(())
    }

    pub async fn refresh_actions(&mut self, api: &ApiClient) -> Result<()> {
        let requested = self.alert_id;
        let actions = api.list_alert_quick_actions(requested).await?;
        self.apply_actions(requested, actions);
        Ok(())
    }

    /// Apply a fetched alert unless the view has moved on.
    pub fn apply_alert(&mut self, requested: Uuid, alert: Alert) {
        if requested != self.alert_id {
            debug!("dropping stale alert response for {}", requested);
            return;
        }
        self.alert = Some(alert);
    }

    /// Apply a fetched action list unless the view has moved on. An open
    /// composer re-syncs its draft from the new list.
    pub fn apply_actions(&mut self, requested: Uuid, actions: Vec<QuickAction>) {
        if requested != self.alert_id {
            debug!("dropping stale quick-action response for {}", requested);
            return;
        }
        self.actions = actions;
        if let Some(alert) = &self.alert {
            self.composer.refresh_actions(alert, &self.actions);
        }
    }

    /// Contacts are account-wide, not alert-scoped; no guard needed.
    pub fn apply_contacts(&mut self, contacts: Vec<EmergencyContact>) {
        self.contacts = contacts;
    }

    pub fn open_composer(&mut self, preselected_action: Option<Uuid>) {
        let Some(alert) = &self.alert else { return };
        self.composer
            .open(alert, &self.actions, &self.contacts, preselected_action);
    }

    pub fn close_composer(&mut self) {
        self.composer.close();
    }

    pub fn select_contact(&mut self, contact_id: i32) {
        let Some(alert) = &self.alert else { return };
        self.composer.select_contact(contact_id, alert, &self.actions);
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.composer.set_platform(platform);
    }

    pub fn edit_message(&mut self, text: impl Into<String>) {
        self.composer.edit(text);
    }

    pub fn selected_contact(&self) -> Option<&EmergencyContact> {
        let contact_id = self.composer.selected_contact_id()?;
        self.contacts.iter().find(|c| c.id == contact_id)
    }

    /// Pre-generated suggestions still waiting for review.
    pub fn pending_suggestions(&self) -> impl Iterator<Item = &QuickAction> {
        self.actions.iter().filter(|a| a.is_pending())
    }

    /// The send affordance is disabled until a contact is chosen and the
    /// message has content.
    pub fn can_send(&self) -> bool {
        self.composer.is_open()
            && self.composer.selected_contact_id().is_some()
            && !self.composer.message().trim().is_empty()
    }

    /// Log and dispatch the composed message, unless an equivalent action
    /// already went out within the debounce window. On suppression the
    /// suggestion (if the draft came from one) is flipped to sent locally
    /// so the UI stops offering it.
    pub async fn send(&mut self, api: &ApiClient, action_type: ActionType) -> Result<SendOutcome> {
        let alert_id = match &self.alert {
            Some(alert) => alert.id,
            None => return Err(ClientError::InvalidInput("alert not loaded".to_string())),
        };
        let contact_id = self
            .composer
            .selected_contact_id()
            .ok_or_else(|| ClientError::InvalidInput("no contact selected".to_string()))?;
        if self.composer.message().trim().is_empty() {
            return Err(ClientError::InvalidInput("message is empty".to_string()));
        }

        let now = chrono::Utc::now().naive_utc();
        if dispatch::should_suppress(&self.actions, action_type.as_str(), now, self.debounce_window)
        {
            info!(
                "suppressing duplicate {} action for alert {}",
                action_type, alert_id
            );
            if let Some(suggestion_id) = self.composer.suggestion_action_id() {
                dispatch::mark_suggestion_sent(&mut self.actions, suggestion_id, now);
            }
            self.composer.close();
            return Ok(SendOutcome::Suppressed);
        }

        let request = CreateQuickActionRequest {
            emergency_contact_id: contact_id,
            action_type,
            message: self.composer.message().to_string(),
            video_clip_ids: Some(Vec::new()),
        };
        let created = api.create_quick_action(alert_id, &request).await?;

        let actions = api.list_alert_quick_actions(alert_id).await?;
        self.apply_actions(alert_id, actions);
        self.composer.close();
        Ok(SendOutcome::Sent(created))
    }

    /// Acknowledge with the user's response text, then reload the alert.
    pub async fn acknowledge(&mut self, api: &ApiClient, response_text: &str) -> Result<()> {
        if response_text.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "acknowledgement response must not be empty".to_string(),
            ));
        }
        let requested = self.alert_id;
        api.acknowledge_alert(requested, response_text).await?;
        let alert = api.get_alert(requested).await?;
        self.apply_alert(requested, alert);
        Ok(())
    }

    pub async fn resolve(&mut self, api: &ApiClient) -> Result<()> {
        let requested = self.alert_id;
        api.resolve_alert(requested).await?;
        let alert = api.get_alert(requested).await?;
        self.apply_alert(requested, alert);
        Ok(())
    }

    /// The merged audit feed for this alert.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        match &self.alert {
            Some(alert) => timeline::compose(alert, &self.actions, self.debounce_window),
            None => Vec::new(),
        }
    }

    /// Assemble a share payload from the current draft and contact.
    pub async fn share_payload(&self, api: &ApiClient) -> Option<SharePayload> {
        let alert = self.alert.as_ref()?;
        Some(
            SharePayload::build(api, alert, self.selected_contact(), self.composer.message())
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use crate::config::Config;
    use crate::models::{ActionStatus, ContactType, Severity};

    use super::*;

    fn now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }

    fn alert(id: Uuid) -> Alert {
        Alert {
            id,
            pet_id: 7,
            pet_name: Some("Rex".to_string()),
            alert_type: "excessive_barking".to_string(),
            severity_level: Severity::Critical,
            message: None,
            critical_indicators: None,
            recommended_actions: None,
            created_at: now() - Duration::hours(1),
            outcome: None,
            user_response: None,
            user_acknowledged_at: None,
            user_notified_at: None,
            resolved_at: None,
            notification_sent: false,
            notification_channels: None,
            intervention_action: None,
            video_id: None,
        }
    }

    fn contact(id: i32) -> EmergencyContact {
        EmergencyContact {
            id,
            user_id: 1,
            contact_type: ContactType::Neighbor,
            name: format!("Contact {}", id),
            phone: "+15551234567".to_string(),
            email: None,
            address: None,
            notes: None,
            priority: 0,
            is_active: true,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn action(
        alert_id: Uuid,
        contact_id: i32,
        status: ActionStatus,
        ts: NaiveDateTime,
    ) -> QuickAction {
        QuickAction {
            id: Uuid::new_v4(),
            alert_id,
            emergency_contact_id: contact_id,
            contact_name: format!("Contact {}", contact_id),
            contact_phone: "+15551234567".to_string(),
            action_type: "sms".to_string(),
            message: "on my way".to_string(),
            video_clips: None,
            status,
            sent_at: (status != ActionStatus::Pending).then_some(ts),
            acknowledged_at: None,
            error_message: None,
            created_at: ts,
        }
    }

    fn view_with_alert() -> (AlertDetailView, Uuid) {
        let alert_id = Uuid::new_v4();
        let mut view = AlertDetailView::new(alert_id, dispatch::default_window());
        view.apply_alert(alert_id, alert(alert_id));
        view.apply_contacts(vec![contact(1)]);
        (view, alert_id)
    }

    fn api() -> ApiClient {
        ApiClient::new(&Config::default()).unwrap()
    }

    #[test]
    fn stale_responses_are_dropped() {
        let (mut view, alert_id) = view_with_alert();
        let other_id = Uuid::new_v4();

        view.apply_alert(other_id, alert(other_id));
        assert_eq!(view.alert.as_ref().unwrap().id, alert_id);

        view.apply_actions(other_id, vec![action(other_id, 1, ActionStatus::Sent, now())]);
        assert!(view.actions.is_empty());
    }

    #[test]
    fn selecting_another_alert_resets_the_view() {
        let (mut view, alert_id) = view_with_alert();
        view.apply_actions(alert_id, vec![action(alert_id, 1, ActionStatus::Sent, now())]);

        let next = Uuid::new_v4();
        view.select_alert(next);
        assert_eq!(view.alert_id(), next);
        assert!(view.alert.is_none());
        assert!(view.actions.is_empty());
    }

    #[test]
    fn can_send_requires_contact_and_text() {
        let (mut view, _) = view_with_alert();
        assert!(!view.can_send());

        view.open_composer(None);
        assert!(view.can_send());

        view.edit_message("");
        assert!(!view.can_send());

        view.edit_message("checking now");
        assert!(view.can_send());
    }

    #[tokio::test]
    async fn duplicate_send_is_suppressed_without_a_network_call() {
        let (mut view, alert_id) = view_with_alert();
        // an sms went out a minute ago
        view.apply_actions(
            alert_id,
            vec![action(alert_id, 1, ActionStatus::Sent, now() - Duration::minutes(1))],
        );
        view.open_composer(None);

        let outcome = view.send(&api(), ActionType::Sms).await.unwrap();
        assert!(matches!(outcome, SendOutcome::Suppressed));
        assert!(!view.composer.is_open());
    }

    #[tokio::test]
    async fn suppressed_send_marks_the_suggestion_sent_locally() {
        let (mut view, alert_id) = view_with_alert();
        let sent = action(alert_id, 1, ActionStatus::Sent, now() - Duration::minutes(1));
        let mut pending = action(alert_id, 1, ActionStatus::Pending, now());
        pending.message =
            r#"{"sms_text":"Call now","email_body":"Please call"}"#.to_string();
        let pending_id = pending.id;
        view.apply_actions(alert_id, vec![sent, pending]);
        view.open_composer(Some(pending_id));

        let outcome = view.send(&api(), ActionType::Sms).await.unwrap();
        assert!(matches!(outcome, SendOutcome::Suppressed));

        let marked = view.actions.iter().find(|a| a.id == pending_id).unwrap();
        assert_eq!(marked.status, ActionStatus::Sent);
        assert!(marked.sent_at.is_some());
    }

    #[tokio::test]
    async fn send_without_contact_is_rejected() {
        let alert_id = Uuid::new_v4();
        let mut view = AlertDetailView::new(alert_id, dispatch::default_window());
        view.apply_alert(alert_id, alert(alert_id));
        view.open_composer(None); // no contacts to preselect

        let result = view.send(&api(), ActionType::Sms).await;
        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }

    #[test]
    fn composer_resyncs_when_actions_refresh() {
        let (mut view, alert_id) = view_with_alert();
        view.open_composer(None);
        assert!(view.composer.message().contains("URGENT"));

        let mut pending = action(alert_id, 1, ActionStatus::Pending, now());
        pending.message =
            r#"{"sms_text":"Call now","email_body":"Please call"}"#.to_string();
        view.apply_actions(alert_id, vec![pending]);

        assert_eq!(view.composer.message(), "Call now");
    }
}
