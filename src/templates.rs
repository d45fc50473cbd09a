pub struct MessageTemplates;

impl MessageTemplates {
    /// Default outreach text when no pre-generated suggestion exists for
    /// the selected contact. Platform-agnostic.
    pub fn default_urgent(pet_name: Option<&str>, alert_type: &str) -> String {
        format!(
            "🚨 URGENT: {} is showing unusual behavior ({}). Please check PetPulse immediately.",
            pet_name.unwrap_or("your pet"),
            alert_type
        )
    }

    /// Title used for share sheets and mail subjects.
    pub fn share_title(alert_type: &str) -> String {
        format!("PetPulse Alert: {}", alert_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urgent_names_the_pet_and_type() {
        let msg = MessageTemplates::default_urgent(Some("Rex"), "excessive_barking");
        assert!(msg.contains("URGENT"));
        assert!(msg.contains("Rex"));
        assert!(msg.contains("excessive_barking"));
    }

    #[test]
    fn default_urgent_falls_back_when_pet_is_unnamed() {
        let msg = MessageTemplates::default_urgent(None, "limping");
        assert!(msg.contains("your pet"));
    }
}
