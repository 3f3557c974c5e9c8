use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::personalities::{PersonalityCardDto, PersonalityDetailDto};
use crate::repository::{CategoryReader, PersonalityListQuery, PersonalityReader};

use super::{ServiceError, ServiceResult};

/// Maximum number of related profiles shown under a personality.
pub const RELATED_PERSONALITIES_LIMIT: usize = 4;

/// Data rendered on a personality page.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityView {
    pub personality: PersonalityDetailDto,
    pub category: CategoryDto,
    pub related: Vec<PersonalityCardDto>,
}

pub fn get_personality<R>(id: &str, repo: &R) -> ServiceResult<PersonalityDetailDto>
where
    R: PersonalityReader,
{
    repo.get_personality_by_id(id)
        .map(PersonalityDetailDto::from)
        .ok_or(ServiceError::NotFound)
}

pub fn list_featured_personalities<R>(repo: &R) -> Vec<PersonalityCardDto>
where
    R: PersonalityReader,
{
    repo.get_featured_personalities()
        .into_iter()
        .map(PersonalityCardDto::from)
        .collect()
}

/// Profile page: the personality, its category and up to
/// [`RELATED_PERSONALITIES_LIMIT`] other members of the same category.
pub fn show_personality<R>(id: &str, repo: &R) -> ServiceResult<PersonalityView>
where
    R: CategoryReader + PersonalityReader,
{
    let Some(personality) = repo.get_personality_by_id(id) else {
        return Err(ServiceError::NotFound);
    };

    let slug = personality.category_slug.as_str();
    let category = match repo.get_category_by_slug(slug) {
        Some(category) => CategoryDto::new(category, repo.count_personalities_by_category(slug)),
        None => {
            log::error!("Personality {id} references missing category {slug}");
            return Err(ServiceError::Internal);
        }
    };

    let related = repo
        .list_personalities(
            PersonalityListQuery::default()
                .category(slug)
                .excluding(id)
                .limit(RELATED_PERSONALITIES_LIMIT),
        )
        .into_iter()
        .map(PersonalityCardDto::from)
        .collect();

    Ok(PersonalityView {
        personality: PersonalityDetailDto::from(personality),
        category,
        related,
    })
}
