use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, CategorySlug};

/// A grouping of personalities, addressed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub slug: CategorySlug,
    pub name: CategoryName,
    pub description: String,
    /// Display token, usually an emoji.
    pub icon: String,
}
