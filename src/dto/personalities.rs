use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::personality::Personality;

/// Formats a catalog date the way cards display it, e.g. "Jan 5, 2024".
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Summary shown on listing cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityCardDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub category: String,
    pub category_slug: String,
    pub image: String,
    pub quote: String,
    pub added_at: Option<String>,
    pub featured: bool,
}

impl From<&Personality> for PersonalityCardDto {
    fn from(value: &Personality) -> Self {
        Self {
            id: value.id.as_str().to_string(),
            name: value.name.as_str().to_string(),
            title: value.title.clone(),
            category: value.category.as_str().to_string(),
            category_slug: value.category_slug.as_str().to_string(),
            image: value.image.as_str().to_string(),
            quote: value.quote.clone(),
            added_at: value.added_at.map(format_card_date),
            featured: value.featured,
        }
    }
}

/// Full profile shown on the detail page and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityDetailDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub category: String,
    pub category_slug: String,
    pub image: String,
    pub quote: String,
    pub story: String,
    /// `story` split on blank lines.
    pub story_paragraphs: Vec<String>,
    pub achievements: Vec<String>,
    pub born: String,
    pub profession: String,
    pub known_for: String,
    pub author_name: Option<String>,
    pub author_linkedin: Option<String>,
    pub added_at: Option<String>,
    pub featured: bool,
}

impl From<&Personality> for PersonalityDetailDto {
    fn from(value: &Personality) -> Self {
        let story_paragraphs = value
            .story
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            id: value.id.as_str().to_string(),
            name: value.name.as_str().to_string(),
            title: value.title.clone(),
            category: value.category.as_str().to_string(),
            category_slug: value.category_slug.as_str().to_string(),
            image: value.image.as_str().to_string(),
            quote: value.quote.clone(),
            story: value.story.clone(),
            story_paragraphs,
            achievements: value.achievements.clone(),
            born: value.born.clone(),
            profession: value.profession.clone(),
            known_for: value.known_for.clone(),
            author_name: value.author.as_ref().map(|a| a.name.as_str().to_string()),
            author_linkedin: value
                .author
                .as_ref()
                .and_then(|a| a.linkedin.as_ref())
                .map(|l| l.as_str().to_string()),
            added_at: value.added_at.map(format_card_date),
            featured: value.featured,
        }
    }
}
