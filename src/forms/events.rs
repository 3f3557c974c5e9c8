use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::relay::{FormKind, RelayPayload};
use crate::domain::types::{EmailAddress, NonEmptyString, PersonName};
use crate::forms::{FieldErrors, FormError, optional, push_optional, reject_spam, trimmed};

/// Request to host a talk.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct HostEventForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub organization: String,
    pub city: String,
    pub event_type: String,
    pub message: String,
    pub website: String,
}

impl HostEventForm {
    fn trimmed(self) -> Self {
        Self {
            name: trimmed(self.name),
            email: trimmed(self.email),
            phone: trimmed(self.phone),
            organization: trimmed(self.organization),
            city: trimmed(self.city),
            event_type: trimmed(self.event_type),
            message: trimmed(self.message),
            website: self.website,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostEventPayload {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: NonEmptyString,
    pub organization: Option<String>,
    pub city: Option<String>,
    pub event_type: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<HostEventForm> for HostEventPayload {
    type Error = FormError;

    fn try_from(value: HostEventForm) -> Result<Self, Self::Error> {
        reject_spam(&value.website)?;
        let value = value.trimmed();
        FieldErrors::from_validation(value.validate()).into_result()?;

        Ok(Self {
            name: PersonName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
            phone: NonEmptyString::new_for_field(value.phone, "phone")?,
            organization: optional(value.organization),
            city: optional(value.city),
            event_type: optional(value.event_type),
            message: optional(value.message),
        })
    }
}

impl RelayPayload for HostEventPayload {
    const KIND: FormKind = FormKind::HostEvent;

    fn into_fields(self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.into_inner()),
            ("email", self.email.into_inner()),
            ("phone", self.phone.into_inner()),
        ];
        push_optional(&mut fields, "organization", self.organization);
        push_optional(&mut fields, "city", self.city);
        push_optional(&mut fields, "event_type", self.event_type);
        push_optional(&mut fields, "message", self.message);
        fields
    }
}

/// Registration for an upcoming talk, posted from the home page.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
    pub university: String,
    pub interest: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPayload {
    pub name: PersonName,
    pub email: EmailAddress,
    pub university: Option<String>,
    pub interest: Option<String>,
}

impl TryFrom<RegistrationForm> for RegistrationPayload {
    type Error = FormError;

    fn try_from(value: RegistrationForm) -> Result<Self, Self::Error> {
        reject_spam(&value.website)?;
        let value = RegistrationForm {
            name: trimmed(value.name),
            email: trimmed(value.email),
            university: trimmed(value.university),
            interest: trimmed(value.interest),
            website: value.website,
        };
        FieldErrors::from_validation(value.validate()).into_result()?;

        Ok(Self {
            name: PersonName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
            university: optional(value.university),
            interest: optional(value.interest),
        })
    }
}

impl RelayPayload for RegistrationPayload {
    const KIND: FormKind = FormKind::Registration;

    fn into_fields(self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.into_inner()), ("email", self.email.into_inner())];
        push_optional(&mut fields, "university", self.university);
        push_optional(&mut fields, "interest", self.interest);
        fields
    }
}
