//! Building the [`CatalogRepository`] from catalog records.
//!
//! Every invariant of the catalog is checked here, once, so that lookups can
//! trust the data for the lifetime of the process.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::category::Category;
use crate::domain::personality::{Author, Personality};
use crate::domain::types::TypeConstraintError;
use crate::domain::youth_story::YouthSpotlightStory;
use crate::models::catalog::CatalogFile;
use crate::repository::{CatalogRepository, RepositoryError, RepositoryResult};

/// Catalog compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

fn invalid(kind: &'static str, key: &str) -> impl FnOnce(TypeConstraintError) -> RepositoryError {
    let key = key.to_string();
    move |source| RepositoryError::InvalidRecord { kind, key, source }
}

impl CatalogRepository {
    /// Builds the store, rejecting duplicate keys, dangling category references
    /// and denormalized category names that disagree with their category.
    pub fn new(
        categories: Vec<Category>,
        personalities: Vec<Personality>,
        youth_stories: Vec<YouthSpotlightStory>,
    ) -> RepositoryResult<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            let slug = category.slug.as_str().to_string();
            if category_index.insert(slug.clone(), position).is_some() {
                return Err(RepositoryError::DuplicateCategory(slug));
            }
        }

        let mut personality_index = HashMap::with_capacity(personalities.len());
        for (position, personality) in personalities.iter().enumerate() {
            let id = personality.id.as_str().to_string();

            let Some(&category_position) = category_index.get(personality.category_slug.as_str())
            else {
                return Err(RepositoryError::UnknownCategory {
                    id,
                    slug: personality.category_slug.as_str().to_string(),
                });
            };
            let category = &categories[category_position];
            if category.name != personality.category {
                return Err(RepositoryError::CategoryNameMismatch {
                    id,
                    slug: category.slug.as_str().to_string(),
                    found: personality.category.as_str().to_string(),
                    expected: category.name.as_str().to_string(),
                });
            }

            if personality_index.insert(id.clone(), position).is_some() {
                return Err(RepositoryError::DuplicatePersonality(id));
            }
        }

        let mut youth_story_index = HashMap::with_capacity(youth_stories.len());
        for (position, story) in youth_stories.iter().enumerate() {
            let id = story.id.as_str().to_string();
            if youth_story_index.insert(id.clone(), position).is_some() {
                return Err(RepositoryError::DuplicateYouthStory(id));
            }
        }

        Ok(Self {
            categories,
            personalities,
            youth_stories,
            category_index,
            personality_index,
            youth_story_index,
            story_of_the_week: None,
        })
    }

    /// Marks an existing personality as the story of the week.
    pub fn with_story_of_the_week(mut self, id: &str) -> RepositoryResult<Self> {
        match self.personality_index.get(id) {
            Some(&position) => {
                self.story_of_the_week = Some(position);
                Ok(self)
            }
            None => Err(RepositoryError::UnknownStoryOfTheWeek(id.to_string())),
        }
    }

    /// Converts parsed catalog records, applying the default author to every
    /// personality that does not name one.
    pub fn from_catalog_file(file: CatalogFile) -> RepositoryResult<Self> {
        let categories = file
            .categories
            .into_iter()
            .map(|record| {
                let slug = record.slug.clone();
                Category::try_from(record).map_err(invalid("category", &slug))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        let default_author = file
            .default_author
            .map(Author::try_from)
            .transpose()
            .map_err(invalid("default author", "defaultAuthor"))?;

        let personalities = file
            .personalities
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                let mut personality =
                    Personality::try_from(record).map_err(invalid("personality", &id))?;
                if personality.author.is_none() {
                    personality.author = default_author.clone();
                }
                Ok(personality)
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        let youth_stories = file
            .youth_stories
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                YouthSpotlightStory::try_from(record).map_err(invalid("youth story", &id))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        let mut repo = Self::new(categories, personalities, youth_stories)?;
        if let Some(id) = file.story_of_the_week {
            repo = repo.with_story_of_the_week(id.trim())?;
        }

        log::info!(
            "Loaded catalog with {} categories, {} personalities and {} youth stories",
            repo.categories.len(),
            repo.personalities.len(),
            repo.youth_stories.len()
        );
        Ok(repo)
    }

    /// Parses and validates a catalog JSON document.
    pub fn from_json_str(raw: &str) -> RepositoryResult<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_catalog_file(file)
    }

    /// Reads a catalog JSON document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        log::info!("Loading catalog from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> RepositoryResult<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }
}
