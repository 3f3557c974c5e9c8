use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::personalities::PersonalityCardDto;
use crate::repository::{CategoryReader, PersonalityReader};

use super::{ServiceError, ServiceResult};

/// Data rendered on a category page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: CategoryDto,
    pub personalities: Vec<PersonalityCardDto>,
}

/// Every category with its member count, in definition order.
pub fn list_categories<R>(repo: &R) -> Vec<CategoryDto>
where
    R: CategoryReader + PersonalityReader,
{
    repo.list_categories()
        .iter()
        .map(|category| {
            CategoryDto::new(
                category,
                repo.count_personalities_by_category(category.slug.as_str()),
            )
        })
        .collect()
}

pub fn get_category<R>(slug: &str, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + PersonalityReader,
{
    match repo.get_category_by_slug(slug) {
        Some(category) => Ok(CategoryDto::new(
            category,
            repo.count_personalities_by_category(slug),
        )),
        None => Err(ServiceError::NotFound),
    }
}

/// Cards of a category's members; empty for an unknown slug.
pub fn list_category_personalities<R>(slug: &str, repo: &R) -> Vec<PersonalityCardDto>
where
    R: PersonalityReader,
{
    repo.get_personalities_by_category(slug)
        .into_iter()
        .map(PersonalityCardDto::from)
        .collect()
}

pub fn show_category<R>(slug: &str, repo: &R) -> ServiceResult<CategoryView>
where
    R: CategoryReader + PersonalityReader,
{
    let category = get_category(slug, repo)?;
    let personalities = list_category_personalities(slug, repo);

    Ok(CategoryView {
        category,
        personalities,
    })
}
