use std::collections::HashMap;

use crate::domain::category::Category;
use crate::domain::personality::Personality;
use crate::domain::youth_story::YouthSpotlightStory;

pub mod catalog;
pub mod category;
pub mod errors;
pub mod personality;
pub mod youth_story;

pub use errors::{RepositoryError, RepositoryResult};

/// Immutable in-memory entity store backing every page.
///
/// Built once at startup (see [`catalog`]) and shared read-only afterwards.
/// Records keep the order in which they were defined; the indexes map exact
/// slugs/ids to positions in those vectors.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    categories: Vec<Category>,
    personalities: Vec<Personality>,
    youth_stories: Vec<YouthSpotlightStory>,
    category_index: HashMap<String, usize>,
    personality_index: HashMap<String, usize>,
    youth_story_index: HashMap<String, usize>,
    story_of_the_week: Option<usize>,
}

/// Query parameters used when listing personalities.
#[derive(Debug, Clone, Default)]
pub struct PersonalityListQuery {
    /// Only personalities whose `category_slug` equals this value.
    pub category: Option<String>,
    /// Only personalities whose `featured` flag equals this value.
    pub featured: Option<bool>,
    /// Skip the personality with this id.
    pub exclude: Option<String>,
    /// Return at most this many records.
    pub limit: Option<usize>,
}

impl PersonalityListQuery {
    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }
    pub fn featured(mut self) -> Self {
        self.featured = Some(true);
        self
    }
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude = Some(id.into());
        self
    }
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `personality` passes every filter of the query.
    pub fn matches(&self, personality: &Personality) -> bool {
        if let Some(slug) = &self.category {
            if !personality.belongs_to(slug) {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if personality.featured != featured {
                return false;
            }
        }
        if let Some(id) = &self.exclude {
            if personality.id.as_str() == id {
                return false;
            }
        }
        true
    }
}

/// Read-only operations for category entities.
///
/// Lookups take raw strings and compare them exactly; a miss is `None`.
pub trait CategoryReader {
    /// All categories in definition order.
    fn list_categories(&self) -> &[Category];
    /// The category whose slug equals `slug`.
    fn get_category_by_slug(&self, slug: &str) -> Option<&Category>;
}

/// Read-only operations for personality entities.
pub trait PersonalityReader {
    /// Personalities matching the query, in definition order.
    fn list_personalities(&self, query: PersonalityListQuery) -> Vec<&Personality>;
    /// The personality whose id equals `id`.
    fn get_personality_by_id(&self, id: &str) -> Option<&Personality>;
    /// Personality highlighted on the home page, if one is configured.
    fn story_of_the_week(&self) -> Option<&Personality>;

    /// Members of a category in definition order; empty for an unknown slug.
    fn get_personalities_by_category(&self, slug: &str) -> Vec<&Personality> {
        self.list_personalities(PersonalityListQuery::default().category(slug))
    }

    /// Every personality flagged as featured, in definition order.
    fn get_featured_personalities(&self) -> Vec<&Personality> {
        self.list_personalities(PersonalityListQuery::default().featured())
    }

    fn count_personalities_by_category(&self, slug: &str) -> usize {
        self.get_personalities_by_category(slug).len()
    }
}

/// Read-only operations for approved youth spotlight stories.
pub trait YouthStoryReader {
    /// All approved stories in definition order.
    fn list_youth_stories(&self) -> &[YouthSpotlightStory];
    /// The story whose id equals `id`.
    fn get_youth_story_by_id(&self, id: &str) -> Option<&YouthSpotlightStory>;
}
