//! Validating lead-generation forms and forwarding them to the relay.

use serde::Serialize;

use crate::domain::relay::{RelayPayload, RelaySubmission};
use crate::forms::FormError;
use crate::forms::contact::{ContactForm, ContactFormPayload};
use crate::forms::events::{
    HostEventForm, HostEventPayload, RegistrationForm, RegistrationPayload,
};
use crate::forms::youth_spotlight::{YouthSpotlightForm, YouthSpotlightPayload};
use crate::models::config::AccessKeys;
use crate::relay::FormRelay;

use super::{ServiceError, ServiceResult};

/// Result of forwarding a valid submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    /// The relay accepted the submission.
    Delivered,
    /// The relay answered with `success: false`.
    Rejected(String),
    /// The relay could not be reached or answered with garbage.
    Unreachable,
}

/// Validates `form` and, when valid, posts it to the relay exactly once.
///
/// Spam and validation failures are returned as errors before any network
/// call is made.
pub async fn submit_form<F, P, S>(
    form: F,
    keys: &AccessKeys,
    relay: &S,
) -> ServiceResult<SubmissionOutcome>
where
    P: TryFrom<F, Error = FormError> + RelayPayload,
    S: FormRelay,
{
    let payload = match P::try_from(form) {
        Ok(payload) => payload,
        Err(FormError::Spam) => {
            log::warn!("Dropped {:?} submission with a filled honeypot", P::KIND);
            return Err(ServiceError::Spam);
        }
        Err(e) => return Err(e.into()),
    };

    let access_key = keys.for_form(P::KIND);
    if access_key.is_empty() {
        log::warn!("No relay access key configured for {:?} submissions", P::KIND);
    }

    let submission = RelaySubmission::from_payload(payload, access_key);
    match relay.submit(&submission).await {
        Ok(response) if response.success => {
            log::info!("Delivered {:?} submission", P::KIND);
            Ok(SubmissionOutcome::Delivered)
        }
        Ok(response) => {
            log::error!(
                "Relay rejected {:?} submission: {}",
                P::KIND,
                response.message
            );
            Ok(SubmissionOutcome::Rejected(response.message))
        }
        Err(e) => {
            log::error!("Failed to relay {:?} submission: {e}", P::KIND);
            Ok(SubmissionOutcome::Unreachable)
        }
    }
}

pub async fn submit_contact<S: FormRelay>(
    form: ContactForm,
    keys: &AccessKeys,
    relay: &S,
) -> ServiceResult<SubmissionOutcome> {
    submit_form::<_, ContactFormPayload, _>(form, keys, relay).await
}

pub async fn submit_host_event<S: FormRelay>(
    form: HostEventForm,
    keys: &AccessKeys,
    relay: &S,
) -> ServiceResult<SubmissionOutcome> {
    submit_form::<_, HostEventPayload, _>(form, keys, relay).await
}

pub async fn submit_registration<S: FormRelay>(
    form: RegistrationForm,
    keys: &AccessKeys,
    relay: &S,
) -> ServiceResult<SubmissionOutcome> {
    submit_form::<_, RegistrationPayload, _>(form, keys, relay).await
}

pub async fn submit_youth_story<S: FormRelay>(
    form: YouthSpotlightForm,
    keys: &AccessKeys,
    relay: &S,
) -> ServiceResult<SubmissionOutcome> {
    submit_form::<_, YouthSpotlightPayload, _>(form, keys, relay).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::relay::RelayResponse;
    use crate::relay::RelayError;

    /// Records submissions and answers with a fixed reply.
    struct RecordingRelay {
        reply: Option<bool>,
        sent: Mutex<Vec<RelaySubmission>>,
    }

    impl RecordingRelay {
        fn answering(success: bool) -> Self {
            Self {
                reply: Some(success),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                reply: None,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<RelaySubmission> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl FormRelay for RecordingRelay {
        async fn submit(&self, submission: &RelaySubmission) -> Result<RelayResponse, RelayError> {
            self.sent.lock().unwrap().push(submission.clone());
            match self.reply {
                Some(success) => Ok(RelayResponse {
                    success,
                    message: if success { "ok".into() } else { "invalid key".into() },
                }),
                None => Err(RelayError::Decode("connection reset".into())),
            }
        }
    }

    fn keys() -> AccessKeys {
        AccessKeys {
            contact: "contact-key".into(),
            host_event: "host-key".into(),
            registration: "registration-key".into(),
            youth_spotlight: "youth-key".into(),
        }
    }

    fn youth_form(article_words: usize) -> YouthSpotlightForm {
        YouthSpotlightForm {
            name: "Kavya Nair".into(),
            college: "IIT Madras".into(),
            city: "Chennai".into(),
            category: "Leadership".into(),
            article: vec!["word"; article_words].join(" "),
            consent: "on".into(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn delivers_contact_form_with_relay_metadata() {
        let relay = RecordingRelay::answering(true);
        let form = ContactForm {
            name: "Meera".into(),
            email: "meera@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        };

        let outcome = submit_contact(form, &keys(), &relay).await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Delivered);
        let sent = relay.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].access_key, "contact-key");
        assert_eq!(sent[0].subject, "New Contact Message — Inspire India Talks");
        assert_eq!(sent[0].from_name, "Inspire India Talks — Contact");
        assert_eq!(sent[0].fields.get("message").map(String::as_str), Some("Hello"));
    }

    #[actix_web::test]
    async fn youth_story_carries_publication_consent() {
        let relay = RecordingRelay::answering(true);

        let outcome = submit_youth_story(youth_form(50), &keys(), &relay)
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Delivered);
        let sent = relay.sent();
        assert_eq!(sent[0].access_key, "youth-key");
        assert_eq!(sent[0].fields.get("consent").map(String::as_str), Some("accepted"));
        assert_eq!(sent[0].fields.get("category").map(String::as_str), Some("Leadership"));
    }

    #[actix_web::test]
    async fn long_article_never_reaches_the_relay() {
        let relay = RecordingRelay::answering(true);

        let err = submit_youth_story(youth_form(301), &keys(), &relay)
            .await
            .unwrap_err();

        let ServiceError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.get("article"),
            Some("Article must be 300 words or less (currently 301 words)")
        );
        assert!(relay.sent().is_empty());
    }

    #[actix_web::test]
    async fn honeypot_never_reaches_the_relay() {
        let relay = RecordingRelay::answering(true);
        let form = YouthSpotlightForm {
            website: "http://bot.example".into(),
            ..youth_form(10)
        };

        let err = submit_youth_story(form, &keys(), &relay).await.unwrap_err();

        assert_eq!(err, ServiceError::Spam);
        assert!(relay.sent().is_empty());
    }

    #[actix_web::test]
    async fn relay_refusal_is_rejected() {
        let relay = RecordingRelay::answering(false);
        let form = RegistrationForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            ..Default::default()
        };

        let outcome = submit_registration(form, &keys(), &relay).await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Rejected("invalid key".into()));
        assert_eq!(relay.sent()[0].access_key, "registration-key");
    }

    #[actix_web::test]
    async fn transport_failure_is_unreachable() {
        let relay = RecordingRelay::offline();
        let form = HostEventForm {
            name: "Rahul".into(),
            email: "rahul@college.edu".into(),
            phone: "12345".into(),
            ..Default::default()
        };

        let outcome = submit_host_event(form, &keys(), &relay).await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Unreachable);
        assert_eq!(relay.sent().len(), 1);
    }
}
