use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::personality::{Author as DomainAuthor, Personality as DomainPersonality};
use crate::domain::types::{
    CategoryName, CategorySlug, ImageSource, PersonName, PersonalityId, ProfileUrl,
    TypeConstraintError,
};

/// Catalog file representation of a story curator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub linkedin: Option<String>,
}

impl TryFrom<Author> for DomainAuthor {
    type Error = TypeConstraintError;

    fn try_from(author: Author) -> Result<Self, Self::Error> {
        Ok(Self {
            name: PersonName::new(author.name)?,
            linkedin: non_blank(author.linkedin).map(ProfileUrl::new).transpose()?,
        })
    }
}

/// Catalog file representation of a personality, keyed the way the site
/// content is authored (`categorySlug`, `knownFor`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: String,
    pub name: String,
    pub title: String,
    pub category: String,
    pub category_slug: String,
    pub image: String,
    pub quote: String,
    pub story: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub born: String,
    pub profession: String,
    pub known_for: String,
    pub author_name: Option<String>,
    pub author_linkedin: Option<String>,
    pub added_at: Option<NaiveDate>,
    pub featured: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<Personality> for DomainPersonality {
    type Error = TypeConstraintError;

    fn try_from(personality: Personality) -> Result<Self, Self::Error> {
        let author = match non_blank(personality.author_name) {
            Some(name) => Some(DomainAuthor::try_from(Author {
                name,
                linkedin: personality.author_linkedin,
            })?),
            None => {
                if non_blank(personality.author_linkedin).is_some() {
                    log::warn!(
                        "Ignoring author link without author name for personality '{}'",
                        personality.id
                    );
                }
                None
            }
        };

        Ok(Self {
            id: PersonalityId::new(personality.id)?,
            name: PersonName::new(personality.name)?,
            title: personality.title.trim().to_string(),
            category: CategoryName::new(personality.category)?,
            category_slug: CategorySlug::new(personality.category_slug)?,
            image: ImageSource::new(personality.image)?,
            quote: personality.quote.trim().to_string(),
            story: personality.story.trim().to_string(),
            achievements: personality
                .achievements
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            born: personality.born.trim().to_string(),
            profession: personality.profession.trim().to_string(),
            known_for: personality.known_for.trim().to_string(),
            author,
            added_at: personality.added_at,
            featured: personality.featured.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Personality {
        serde_json::from_value(serde_json::json!({
            "id": "ratan-tata",
            "name": "Ratan Tata",
            "title": "Former Chairman, Tata Group",
            "category": "Entrepreneurs",
            "categorySlug": "entrepreneurs",
            "image": "/assets/images/personalities/ratan-tata.jpg",
            "quote": "Take decisions and make them right.",
            "story": "  A story.  ",
            "achievements": ["First", " ", "Second "],
            "born": "28 December 1937",
            "profession": "Industrialist",
            "knownFor": "Tata Group",
            "addedAt": "2024-01-15"
        }))
        .unwrap()
    }

    #[test]
    fn converts_camel_case_record() {
        let personality: DomainPersonality = record().try_into().unwrap();

        assert_eq!(personality.id, "ratan-tata");
        assert_eq!(personality.category_slug, "entrepreneurs");
        assert_eq!(personality.story, "A story.");
        assert_eq!(personality.achievements, vec!["First", "Second"]);
        assert_eq!(
            personality.added_at,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert!(!personality.featured);
        assert!(personality.author.is_none());
    }

    #[test]
    fn author_link_without_name_is_dropped() {
        let mut record = record();
        record.author_linkedin = Some("https://www.linkedin.com/in/someone".into());

        let personality: DomainPersonality = record.try_into().unwrap();
        assert!(personality.author.is_none());
    }

    #[test]
    fn rejects_invalid_author_link() {
        let mut record = record();
        record.author_name = Some("Inspire India".into());
        record.author_linkedin = Some("not a url".into());

        let err = DomainPersonality::try_from(record).unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("profile url"));
    }
}
