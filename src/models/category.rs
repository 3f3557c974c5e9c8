use serde::{Deserialize, Serialize};

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryName, CategorySlug, TypeConstraintError};

/// Catalog file representation of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            slug: CategorySlug::new(category.slug)?,
            name: CategoryName::new(category.name)?,
            description: category.description.trim().to_string(),
            icon: category.icon.trim().to_string(),
        })
    }
}

impl From<DomainCategory> for Category {
    fn from(category: DomainCategory) -> Self {
        Self {
            slug: category.slug.into_inner(),
            name: category.name.into_inner(),
            description: category.description,
            icon: category.icon,
        }
    }
}
