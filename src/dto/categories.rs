use serde::Serialize;

use crate::domain::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub personality_count: usize,
}

impl CategoryDto {
    pub fn new(category: &Category, personality_count: usize) -> Self {
        Self {
            slug: category.slug.as_str().to_string(),
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            personality_count,
        }
    }
}
