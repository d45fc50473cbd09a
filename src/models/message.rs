use serde::Deserialize;

use super::Platform;

/// The backend's suggestion engine writes quick-action bodies as a JSON
/// pair with one variant per channel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StructuredMessage {
    pub sms_text: String,
    pub email_body: String,
}

impl StructuredMessage {
    pub fn variant(&self, platform: Platform) -> &str {
        match platform {
            Platform::Sms => &self.sms_text,
            Platform::Email => &self.email_body,
        }
    }
}

/// A quick-action message body is either a JSON-encoded per-channel pair or
/// plain text. The shape is decided once, at the boundary, by a parse
/// attempt; a body that is not valid JSON with both variants is plain text.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    Plain(String),
    Structured(StructuredMessage),
}

impl MessageBody {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<StructuredMessage>(raw) {
            Ok(parsed) => MessageBody::Structured(parsed),
            Err(_) => MessageBody::Plain(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_suggestion() {
        let raw = r#"{"sms_text":"Call now","email_body":"Please call regarding A1"}"#;
        match MessageBody::parse(raw) {
            MessageBody::Structured(parsed) => {
                assert_eq!(parsed.variant(Platform::Sms), "Call now");
                assert_eq!(parsed.variant(Platform::Email), "Please call regarding A1");
            }
            MessageBody::Plain(_) => panic!("expected structured body"),
        }
    }

    #[test]
    fn malformed_json_falls_back_to_plain() {
        let raw = "check on Rex please";
        assert_eq!(MessageBody::parse(raw), MessageBody::Plain(raw.to_string()));
    }

    #[test]
    fn json_missing_a_variant_is_plain() {
        let raw = r#"{"sms_text":"Call now"}"#;
        assert_eq!(MessageBody::parse(raw), MessageBody::Plain(raw.to_string()));
    }

    #[test]
    fn json_of_wrong_shape_is_plain() {
        let raw = r#"["sms_text","email_body"]"#;
        assert_eq!(MessageBody::parse(raw), MessageBody::Plain(raw.to_string()));
    }
}
