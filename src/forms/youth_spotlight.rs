use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::relay::{FormKind, RelayPayload};
use crate::domain::types::{NonEmptyString, PersonName, VideoLink};
use crate::forms::{FieldErrors, FormError, count_words, optional, push_optional, reject_spam, trimmed};

pub const MAX_ARTICLE_WORDS: usize = 300;

/// Categories a youth story can be filed under.
pub const YOUTH_CATEGORIES: [&str; 6] = [
    "Social Impact",
    "Innovation",
    "Leadership",
    "Environment",
    "Culture",
    "Personal Growth",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct YouthSpotlightForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "College/School is required"))]
    pub college: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub video_link: String,
    pub article: String,
    /// Checkbox value; browsers omit it when unchecked.
    #[validate(length(min = 1, message = "Consent is required"))]
    pub consent: String,
    pub website: String,
}

impl YouthSpotlightForm {
    fn trimmed(self) -> Self {
        Self {
            name: trimmed(self.name),
            college: trimmed(self.college),
            city: trimmed(self.city),
            category: trimmed(self.category),
            video_link: trimmed(self.video_link),
            article: trimmed(self.article),
            consent: trimmed(self.consent),
            website: self.website,
        }
    }

    /// Checks that go beyond the derive: category choice, content presence,
    /// article length and the video host.
    fn content_errors(&self, errors: &mut FieldErrors) {
        if !self.category.is_empty() && !YOUTH_CATEGORIES.contains(&self.category.as_str()) {
            errors.insert("category", "Please select a valid category");
        }

        if self.video_link.is_empty() && self.article.is_empty() {
            errors.insert("content", "Please provide either a video link or an article");
        }

        let words = count_words(&self.article);
        if words > MAX_ARTICLE_WORDS {
            errors.insert(
                "article",
                format!("Article must be {MAX_ARTICLE_WORDS} words or less (currently {words} words)"),
            );
        }

        if !self.video_link.is_empty() && VideoLink::new_allowed(self.video_link.as_str()).is_err() {
            errors.insert("video_link", "Please provide a valid Google Drive link");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YouthSpotlightPayload {
    pub name: PersonName,
    pub college: NonEmptyString,
    pub city: NonEmptyString,
    pub category: NonEmptyString,
    pub video_link: Option<VideoLink>,
    pub article: Option<String>,
}

impl TryFrom<YouthSpotlightForm> for YouthSpotlightPayload {
    type Error = FormError;

    fn try_from(value: YouthSpotlightForm) -> Result<Self, Self::Error> {
        reject_spam(&value.website)?;
        let value = value.trimmed();
        let mut errors = FieldErrors::from_validation(value.validate());
        value.content_errors(&mut errors);
        errors.into_result()?;

        let video_link = optional(value.video_link)
            .map(VideoLink::new_allowed)
            .transpose()?;

        Ok(Self {
            name: PersonName::new(value.name)?,
            college: NonEmptyString::new_for_field(value.college, "college")?,
            city: NonEmptyString::new_for_field(value.city, "city")?,
            category: NonEmptyString::new_for_field(value.category, "category")?,
            video_link,
            article: optional(value.article),
        })
    }
}

impl RelayPayload for YouthSpotlightPayload {
    const KIND: FormKind = FormKind::YouthSpotlight;

    fn into_fields(self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.into_inner()),
            ("college", self.college.into_inner()),
            ("city", self.city.into_inner()),
            ("category", self.category.into_inner()),
        ];
        push_optional(&mut fields, "video_link", self.video_link.map(VideoLink::into_inner));
        push_optional(&mut fields, "article", self.article);
        fields.push(("consent", "accepted".to_string()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn valid_form() -> YouthSpotlightForm {
        YouthSpotlightForm {
            name: "Kavya Nair".into(),
            college: "IIT Madras".into(),
            city: "Chennai".into(),
            category: "Innovation".into(),
            video_link: String::new(),
            article: words(120),
            consent: "on".into(),
            website: String::new(),
        }
    }

    fn field_errors(form: YouthSpotlightForm) -> FieldErrors {
        match YouthSpotlightPayload::try_from(form) {
            Err(FormError::Invalid(errors)) => errors,
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn accepts_article_at_the_limit() {
        let form = YouthSpotlightForm {
            article: words(MAX_ARTICLE_WORDS),
            ..valid_form()
        };
        let payload = YouthSpotlightPayload::try_from(form).unwrap();
        assert_eq!(payload.video_link, None);
    }

    #[test]
    fn rejects_article_over_the_limit() {
        let errors = field_errors(YouthSpotlightForm {
            article: words(301),
            ..valid_form()
        });
        assert_eq!(
            errors.get("article"),
            Some("Article must be 300 words or less (currently 301 words)")
        );
    }

    #[test]
    fn requires_some_content() {
        let errors = field_errors(YouthSpotlightForm {
            article: "   ".into(),
            ..valid_form()
        });
        assert_eq!(
            errors.get("content"),
            Some("Please provide either a video link or an article")
        );
    }

    #[test]
    fn video_link_must_be_on_google_drive() {
        let errors = field_errors(YouthSpotlightForm {
            video_link: "https://youtube.com/watch?v=abc".into(),
            article: String::new(),
            ..valid_form()
        });
        assert_eq!(errors.get("video_link"), Some("Please provide a valid Google Drive link"));
        assert!(!errors.contains("content"));

        let payload = YouthSpotlightPayload::try_from(YouthSpotlightForm {
            video_link: "https://drive.google.com/file/d/abc/view".into(),
            article: String::new(),
            ..valid_form()
        })
        .unwrap();
        assert!(payload.video_link.is_some());
    }

    #[test]
    fn requires_consent_and_known_category() {
        let errors = field_errors(YouthSpotlightForm {
            consent: String::new(),
            category: "Astrology".into(),
            ..valid_form()
        });
        assert_eq!(errors.get("consent"), Some("Consent is required"));
        assert_eq!(errors.get("category"), Some("Please select a valid category"));

        let errors = field_errors(YouthSpotlightForm {
            category: String::new(),
            ..valid_form()
        });
        assert_eq!(errors.get("category"), Some("Category is required"));
    }

    #[test]
    fn rejects_links_that_only_look_like_drive() {
        for link in [
            r"https://evil.example\@drive.google.com/file/d/abc/view",
            "https://drive.google.com@evil.example/file/d/abc/view",
            "https://drive.google.com.evil.example/file/d/abc/view",
        ] {
            let errors = field_errors(YouthSpotlightForm {
                video_link: link.into(),
                ..valid_form()
            });
            assert_eq!(
                errors.get("video_link"),
                Some("Please provide a valid Google Drive link"),
                "{link}"
            );
        }
    }

    #[test]
    fn relayed_fields_record_consent() {
        let payload = YouthSpotlightPayload::try_from(valid_form()).unwrap();
        let fields = payload.into_fields();
        assert!(fields.contains(&("consent", "accepted".to_string())));
    }

    #[test]
    fn honeypot_is_checked_first() {
        let form = YouthSpotlightForm {
            article: words(301),
            website: "bot".into(),
            ..valid_form()
        };
        assert_eq!(YouthSpotlightPayload::try_from(form), Err(FormError::Spam));
    }
}
