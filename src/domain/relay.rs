use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The lead-generation forms forwarded to the relay endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// General contact message.
    Contact,
    /// Request to book a speaker for an event.
    HostEvent,
    /// Interest in attending an upcoming talk.
    Registration,
    /// Student story submitted for the youth spotlight.
    YouthSpotlight,
}

impl FormKind {
    /// Subject line of the relayed e-mail.
    pub const fn subject(self) -> &'static str {
        match self {
            Self::Contact => "New Contact Message — Inspire India Talks",
            Self::HostEvent => "New Event Inquiry — Inspire India Talks",
            Self::Registration => "New Event Registration — Inspire India Talks",
            Self::YouthSpotlight => "Youth Spotlight Submission — Inspire India Talks",
        }
    }

    /// Sender label of the relayed e-mail.
    pub const fn from_name(self) -> &'static str {
        match self {
            Self::Contact => "Inspire India Talks — Contact",
            Self::HostEvent => "Inspire India Talks — Event Inquiry",
            Self::Registration => "Inspire India Talks — Registration",
            Self::YouthSpotlight => "Inspire India Talks — Youth Spotlight",
        }
    }
}

/// Validated form data that can be forwarded to the relay.
pub trait RelayPayload {
    const KIND: FormKind;

    /// Field name/value pairs in the order they appear on the form. Absent
    /// optional values are omitted.
    fn into_fields(self) -> Vec<(&'static str, String)>;
}

/// Request body accepted by the relay endpoint.
///
/// Form fields are flattened next to the fixed `access_key`, `subject` and
/// `from_name` keys.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RelaySubmission {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl RelaySubmission {
    pub fn new(kind: FormKind, access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            subject: kind.subject().to_string(),
            from_name: kind.from_name().to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Builds a submission from a validated payload.
    pub fn from_payload<P: RelayPayload>(payload: P, access_key: impl Into<String>) -> Self {
        let mut submission = Self::new(P::KIND, access_key);
        for (name, value) in payload.into_fields() {
            submission.fields.insert(name.to_string(), value);
        }
        submission
    }
}

/// Response body returned by the relay endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl RelayPayload for Ping {
        const KIND: FormKind = FormKind::Registration;

        fn into_fields(self) -> Vec<(&'static str, String)> {
            vec![("name", "Asha".to_string()), ("email", "asha@example.com".to_string())]
        }
    }

    #[test]
    fn flattens_fields_next_to_relay_metadata() {
        let submission = RelaySubmission::from_payload(Ping, "key-123");
        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "access_key": "key-123",
                "subject": "New Event Registration — Inspire India Talks",
                "from_name": "Inspire India Talks — Registration",
                "name": "Asha",
                "email": "asha@example.com",
            })
        );
    }

    #[test]
    fn response_message_is_optional() {
        let parsed: RelayResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.message.is_empty());
    }
}
