//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and link constraints are enforced at the boundary.

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use validator::ValidateUrl;

lazy_static! {
    /// URL-safe identifier: lowercase alphanumerics separated by single hyphens.
    /// - Valid: "entrepreneurs", "sports-icons", "apj-abdul-kalam"
    /// - Invalid: "-icons", "icons-", "sports--icons", "Sports", "sports_icons"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    /// File id segment of a Google Drive share link, e.g. `/file/d/<id>/view`.
    static ref DRIVE_FILE_ID_REGEX: Regex = Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap();
}

/// Hosts accepted for youth spotlight video links.
pub const ALLOWED_VIDEO_HOSTS: [&str; 1] = ["drive.google.com"];

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A slug or identifier contained characters outside the URL-safe set.
    #[error("{0} must contain only lowercase letters, digits and single hyphens")]
    InvalidSlug(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// A URL pointed at a host outside the allow-list.
    #[error("{0} must point to one of: {1}")]
    DisallowedHost(&'static str, String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Lowercase host of an absolute `http(s)` URL, as a browser would resolve it.
pub fn url_host(value: &str) -> Option<String> {
    let parsed = Url::parse(value).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Self::new_for_field(value, "value")
    }

    /// Same as [`Self::new`] but with field-specific error context.
    pub fn new_for_field<S: Into<String>>(
        value: S,
        field: &'static str,
    ) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, field).map(Self)
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Shared accessors and conversions for string-backed newtypes.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! slug_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed identifier matching [`SLUG_REGEX`].
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if SLUG_REGEX.is_match(&trimmed) {
                    Ok(Self(trimmed))
                } else {
                    Err(TypeConstraintError::InvalidSlug($field))
                }
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new_for_field(value, $field)?;
                Ok(Self(inner.into_inner()))
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_impls!($name);
    };
}

slug_newtype!(
    CategorySlug,
    "URL-safe unique identifier of a category.",
    "category slug"
);
slug_newtype!(
    PersonalityId,
    "URL-safe unique identifier of a personality.",
    "personality id"
);
slug_newtype!(
    YouthStoryId,
    "Unique identifier of an approved youth spotlight story.",
    "story id"
);

non_empty_string_newtype!(
    CategoryName,
    "Category display name enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    PersonName,
    "Full name of a person enforcing non-empty values.",
    "name"
);
non_empty_string_newtype!(
    ImageSource,
    "Image URI or site-relative path. Reachability is not checked.",
    "image"
);
non_empty_string_newtype!(
    EmailAddress,
    "E-mail address; format is checked by the submitting form.",
    "email"
);

url_string_newtype!(ProfileUrl, "Public profile URL such as LinkedIn.", "profile url");

/// Link to a hosted video. Any valid URL is accepted; rendering and new
/// submissions additionally require a host from [`ALLOWED_VIDEO_HOSTS`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VideoLink(String);

impl VideoLink {
    /// Constructs a trimmed URL and validates its format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "video link")?;
        if !trimmed.as_str().validate_url() || url_host(&trimmed).is_none() {
            return Err(TypeConstraintError::InvalidUrl("video link"));
        }
        Ok(Self(trimmed))
    }

    /// Constructs a link and requires its host to be on the allow-list.
    pub fn new_allowed<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let link = Self::new(value)?;
        if link.is_renderable() {
            Ok(link)
        } else {
            Err(TypeConstraintError::DisallowedHost(
                "video link",
                ALLOWED_VIDEO_HOSTS.join(", "),
            ))
        }
    }

    /// Whether the link points at a recognised video host.
    pub fn is_renderable(&self) -> bool {
        match url_host(&self.0) {
            Some(host) => ALLOWED_VIDEO_HOSTS.iter().any(|allowed| {
                host == *allowed || host.ends_with(&format!(".{allowed}"))
            }),
            None => false,
        }
    }

    /// Drive file id for renderable links that carry one.
    pub fn drive_file_id(&self) -> Option<&str> {
        if !self.is_renderable() {
            return None;
        }
        DRIVE_FILE_ID_REGEX
            .captures(&self.0)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str())
    }

    /// Embeddable preview player URL for Drive files.
    pub fn embed_url(&self) -> Option<String> {
        self.drive_file_id()
            .map(|id| format!("https://drive.google.com/file/d/{id}/preview"))
    }
}

string_newtype_impls!(VideoLink);
