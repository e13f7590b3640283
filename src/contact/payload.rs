//! Wire types for the contact endpoint

use serde::{Deserialize, Serialize};

/// Source tag sent with every submission unless configured otherwise
pub const DEFAULT_SOURCE: &str = "website_contact_form";

/// JSON body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: String,
}

impl ContactPayload {
    /// Build a payload from raw field values, trimming each one
    pub fn new(name: &str, email: &str, message: &str, source: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
            source: source.to_string(),
        }
    }
}

/// Response body as far as the client cares: an optional message
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerBody {
    /// Parse a response body, treating anything that is not a JSON object
    /// with a string `message` as carrying no message
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// A response the server accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_trims_values() {
        let payload = ContactPayload::new(
            "  Jo-Anne O'Neil ",
            "jo@example.com\t",
            "\nHello there\n",
            DEFAULT_SOURCE,
        );

        assert_eq!(
            payload,
            ContactPayload {
                name: "Jo-Anne O'Neil".to_string(),
                email: "jo@example.com".to_string(),
                message: "Hello there".to_string(),
                source: "website_contact_form".to_string(),
            }
        );
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let payload = ContactPayload {
            name: "Jo-Anne".to_string(),
            email: "a@b.c".to_string(),
            message: "Hello".to_string(),
            source: DEFAULT_SOURCE.to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Jo-Anne",
                "email": "a@b.c",
                "message": "Hello",
                "source": "website_contact_form",
            })
        );
    }

    #[test]
    fn test_server_body_with_message() {
        let body = ServerBody::parse(r#"{"message": "Email already used"}"#);
        assert_eq!(body.message.as_deref(), Some("Email already used"));
    }

    #[test]
    fn test_server_body_ignores_extra_fields() {
        let body = ServerBody::parse(r#"{"ok": true, "id": 7}"#);
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_server_body_not_json() {
        assert_eq!(ServerBody::parse("<html>502</html>"), ServerBody::default());
        assert_eq!(ServerBody::parse(""), ServerBody::default());
    }

    #[test]
    fn test_server_body_non_string_message() {
        assert_eq!(ServerBody::parse(r#"{"message": 42}"#), ServerBody::default());
    }
}
