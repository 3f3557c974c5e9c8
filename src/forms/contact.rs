use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::relay::{FormKind, RelayPayload};
use crate::domain::types::{EmailAddress, NonEmptyString, PersonName};
use crate::forms::{FieldErrors, FormError, optional, push_optional, reject_spam, trimmed};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    pub organization: String,
    pub inquiry_type: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Honeypot, left empty by people.
    pub website: String,
}

impl ContactForm {
    fn trimmed(self) -> Self {
        Self {
            name: trimmed(self.name),
            email: trimmed(self.email),
            organization: trimmed(self.organization),
            inquiry_type: trimmed(self.inquiry_type),
            message: trimmed(self.message),
            website: self.website,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormPayload {
    pub name: PersonName,
    pub email: EmailAddress,
    pub organization: Option<String>,
    pub inquiry_type: Option<String>,
    pub message: NonEmptyString,
}

impl TryFrom<ContactForm> for ContactFormPayload {
    type Error = FormError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        reject_spam(&value.website)?;
        let value = value.trimmed();
        FieldErrors::from_validation(value.validate()).into_result()?;

        Ok(Self {
            name: PersonName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
            organization: optional(value.organization),
            inquiry_type: optional(value.inquiry_type),
            message: NonEmptyString::new_for_field(value.message, "message")?,
        })
    }
}

impl RelayPayload for ContactFormPayload {
    const KIND: FormKind = FormKind::Contact;

    fn into_fields(self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.into_inner()), ("email", self.email.into_inner())];
        push_optional(&mut fields, "organization", self.organization);
        push_optional(&mut fields, "inquiry_type", self.inquiry_type);
        fields.push(("message", self.message.into_inner()));
        fields
    }
}
