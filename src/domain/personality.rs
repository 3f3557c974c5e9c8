use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, CategorySlug, ImageSource, PersonName, PersonalityId, ProfileUrl,
};

/// Curator credited for writing a personality's story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: PersonName,
    pub linkedin: Option<ProfileUrl>,
}

/// A profile in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Personality {
    pub id: PersonalityId,
    pub name: PersonName,
    pub title: String,
    /// Display name copied from the owning category.
    pub category: CategoryName,
    pub category_slug: CategorySlug,
    pub image: ImageSource,
    pub quote: String,
    pub story: String,
    pub achievements: Vec<String>,
    pub born: String,
    pub profession: String,
    pub known_for: String,
    pub author: Option<Author>,
    pub added_at: Option<NaiveDate>,
    pub featured: bool,
}

impl Personality {
    /// Exact, case-sensitive match on the owning category slug.
    pub fn belongs_to(&self, slug: &str) -> bool {
        self.category_slug.as_str() == slug
    }
}
