use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors raised while building the catalog. Lookups themselves never fail.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {kind} '{key}': {source}")]
    InvalidRecord {
        kind: &'static str,
        key: String,
        source: TypeConstraintError,
    },
    #[error("duplicate category slug '{0}'")]
    DuplicateCategory(String),
    #[error("duplicate personality id '{0}'")]
    DuplicatePersonality(String),
    #[error("duplicate youth story id '{0}'")]
    DuplicateYouthStory(String),
    #[error("personality '{id}' references unknown category '{slug}'")]
    UnknownCategory { id: String, slug: String },
    #[error("personality '{id}' names category '{found}' but '{slug}' is called '{expected}'")]
    CategoryNameMismatch {
        id: String,
        slug: String,
        found: String,
        expected: String,
    },
    #[error("story of the week '{0}' is not in the catalog")]
    UnknownStoryOfTheWeek(String),
}

/// Convenient alias for results returned while building the catalog.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
