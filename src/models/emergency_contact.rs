use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ContactType;

/// A responder the user may notify about an alert. Managed from the
/// profile page; read-only from the alert views.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmergencyContact {
    pub id: i32,
    pub user_id: i32,
    pub contact_type: ContactType,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub priority: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EmergencyContact {
    /// Whether the email share affordance can target this contact.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}
