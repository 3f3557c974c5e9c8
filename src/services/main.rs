use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::personalities::{PersonalityCardDto, PersonalityDetailDto};
use crate::repository::{CategoryReader, PersonalityListQuery, PersonalityReader};
use crate::services::categories::list_categories;
use crate::services::personalities::list_featured_personalities;

/// Catalog totals shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub personalities: usize,
    pub categories: usize,
    pub achievements: usize,
}

/// Data rendered on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexView {
    pub featured: Vec<PersonalityCardDto>,
    pub categories: Vec<CategoryDto>,
    pub story_of_the_week: Option<PersonalityDetailDto>,
    pub stats: CatalogStats,
}

pub fn catalog_stats<R>(repo: &R) -> CatalogStats
where
    R: CategoryReader + PersonalityReader,
{
    let personalities = repo.list_personalities(PersonalityListQuery::default());
    CatalogStats {
        personalities: personalities.len(),
        categories: repo.list_categories().len(),
        achievements: personalities.iter().map(|p| p.achievements.len()).sum(),
    }
}

/// Core business logic for rendering the index page.
pub fn show_index<R>(repo: &R) -> IndexView
where
    R: CategoryReader + PersonalityReader,
{
    IndexView {
        featured: list_featured_personalities(repo),
        categories: list_categories(repo),
        story_of_the_week: repo.story_of_the_week().map(PersonalityDetailDto::from),
        stats: catalog_stats(repo),
    }
}
