//! Outreach message composer for a single alert: decides what text sits in
//! the textbox as the user picks a contact or flips the SMS/Email tab, and
//! keeps a manual edit untouchable until the contact changes.

use uuid::Uuid;

use crate::models::{Alert, EmergencyContact, MessageBody, Platform, QuickAction, StructuredMessage};
use crate::templates::MessageTemplates;

/// Where the current draft text came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftSource {
    /// A pre-generated suggestion for the selected contact, kept so the
    /// platform switch can swap variants without refetching.
    Suggestion {
        action_id: Uuid,
        content: StructuredMessage,
    },
    /// Derived text (template or a plain-text pending body); re-resolved
    /// when the contact or the action list changes.
    Derived,
    /// The user typed into the box; nothing overwrites this until the
    /// contact changes.
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComposerState {
    Closed,
    Composing {
        source: DraftSource,
        platform: Platform,
    },
}

#[derive(Debug, Clone)]
pub struct Composer {
    state: ComposerState,
    selected_contact_id: Option<i32>,
    message: String,
}

impl Composer {
    pub fn new() -> Self {
        Composer {
            state: ComposerState::Closed,
            selected_contact_id: None,
            message: String::new(),
        }
    }

    /// Open the dialog. Clears any manual edit, resets the tab to SMS and
    /// resolves the draft: an explicitly chosen suggestion wins, then a
    /// pending suggestion for the selected contact, then any pending one,
    /// then the default template (selecting the first contact if none is).
    pub fn open(
        &mut self,
        alert: &Alert,
        actions: &[QuickAction],
        contacts: &[EmergencyContact],
        preselected_action: Option<Uuid>,
    ) {
        let platform = Platform::Sms;

        let chosen = preselected_action
            .and_then(|id| actions.iter().find(|a| a.id == id))
            .or_else(|| {
                self.selected_contact_id.and_then(|contact_id| {
                    actions
                        .iter()
                        .find(|a| a.emergency_contact_id == contact_id && a.is_pending())
                })
            })
            .or_else(|| actions.iter().find(|a| a.is_pending()));

        match chosen {
            Some(action) => {
                self.selected_contact_id = Some(action.emergency_contact_id);
                self.apply_action(action, platform);
            }
            None => {
                if self.selected_contact_id.is_none() {
                    self.selected_contact_id = contacts.first().map(|c| c.id);
                }
                self.apply_default(alert, platform);
            }
        }
    }

    pub fn close(&mut self) {
        self.state = ComposerState::Closed;
    }

    /// Selecting a contact resets the manual-edit override and re-resolves
    /// the draft for the new contact.
    pub fn select_contact(&mut self, contact_id: i32, alert: &Alert, actions: &[QuickAction]) {
        self.selected_contact_id = Some(contact_id);
        if let ComposerState::Composing { platform, .. } = &self.state {
            let platform = *platform;
            self.resolve(alert, actions, platform);
        }
    }

    /// Re-sync the draft after the action list was refetched. A manual
    /// edit survives; derived and suggested drafts re-resolve.
    pub fn refresh_actions(&mut self, alert: &Alert, actions: &[QuickAction]) {
        match &self.state {
            ComposerState::Composing { source, platform } if *source != DraftSource::Manual => {
                let platform = *platform;
                self.resolve(alert, actions, platform);
            }
            _ => {}
        }
    }

    /// Switch the SMS/Email tab. With an intact suggestion the text swaps
    /// to the matching variant; a manual edit persists across tabs, and a
    /// derived draft is platform-agnostic.
    pub fn set_platform(&mut self, platform: Platform) {
        let ComposerState::Composing {
            source,
            platform: current,
        } = &mut self.state
        else {
            return;
        };
        if *current == platform {
            return;
        }
        *current = platform;

        let swapped = match source {
            DraftSource::Suggestion { content, .. } => {
                let text = content.variant(platform);
                (!text.is_empty()).then(|| text.to_string())
            }
            _ => None,
        };
        if let Some(text) = swapped {
            self.message = text;
        }
    }

    /// The user typed into the textbox. From here on the draft belongs to
    /// them: platform switches and action refreshes leave it alone.
    pub fn edit(&mut self, text: impl Into<String>) {
        let ComposerState::Composing { source, .. } = &mut self.state else {
            return;
        };
        *source = DraftSource::Manual;
        self.message = text.into();
    }

    fn resolve(&mut self, alert: &Alert, actions: &[QuickAction], platform: Platform) {
        let pending = self.selected_contact_id.and_then(|contact_id| {
            actions
                .iter()
                .find(|a| a.emergency_contact_id == contact_id && a.is_pending())
        });
        match pending {
            Some(action) => self.apply_action(action, platform),
            None => self.apply_default(alert, platform),
        }
    }

    fn apply_action(&mut self, action: &QuickAction, platform: Platform) {
        match MessageBody::parse(&action.message) {
            MessageBody::Structured(content) => {
                let text = content.variant(platform);
                self.message = if text.is_empty() {
                    action.message.clone()
                } else {
                    text.to_string()
                };
                self.state = ComposerState::Composing {
                    source: DraftSource::Suggestion {
                        action_id: action.id,
                        content,
                    },
                    platform,
                };
            }
            MessageBody::Plain(raw) => {
                self.message = raw;
                self.state = ComposerState::Composing {
                    source: DraftSource::Derived,
                    platform,
                };
            }
        }
    }

    fn apply_default(&mut self, alert: &Alert, platform: Platform) {
        self.message =
            MessageTemplates::default_urgent(alert.pet_name.as_deref(), &alert.alert_type);
        self.state = ComposerState::Composing {
            source: DraftSource::Derived,
            platform,
        };
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ComposerState::Closed)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn selected_contact_id(&self) -> Option<i32> {
        self.selected_contact_id
    }

    pub fn platform(&self) -> Option<Platform> {
        match &self.state {
            ComposerState::Composing { platform, .. } => Some(*platform),
            ComposerState::Closed => None,
        }
    }

    pub fn is_manual_edit(&self) -> bool {
        matches!(
            &self.state,
            ComposerState::Composing {
                source: DraftSource::Manual,
                ..
            }
        )
    }

    pub fn suggestion(&self) -> Option<&StructuredMessage> {
        match &self.state {
            ComposerState::Composing {
                source: DraftSource::Suggestion { content, .. },
                ..
            } => Some(content),
            _ => None,
        }
    }

    /// Id of the pending action the current suggestion came from, for the
    /// optimistic sent transition on a suppressed send.
    pub fn suggestion_action_id(&self) -> Option<Uuid> {
        match &self.state {
            ComposerState::Composing {
                source: DraftSource::Suggestion { action_id, .. },
                ..
            } => Some(*action_id),
            _ => None,
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
