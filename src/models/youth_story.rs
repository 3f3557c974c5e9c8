use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, TypeConstraintError, VideoLink, YouthStoryId};
use crate::domain::youth_story::YouthSpotlightStory as DomainYouthStory;

/// Catalog file representation of an approved youth spotlight story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouthSpotlightStory {
    pub id: String,
    pub name: String,
    pub college: String,
    pub city: String,
    pub category: String,
    pub video_link: Option<String>,
    pub article: Option<String>,
    pub submitted_date: NaiveDate,
    pub approved_date: NaiveDate,
}

impl TryFrom<YouthSpotlightStory> for DomainYouthStory {
    type Error = TypeConstraintError;

    fn try_from(story: YouthSpotlightStory) -> Result<Self, Self::Error> {
        let video_link = story
            .video_link
            .filter(|link| !link.trim().is_empty())
            .map(VideoLink::new)
            .transpose()?;
        let article = story
            .article
            .map(|article| article.trim().to_string())
            .filter(|article| !article.is_empty());

        Ok(Self {
            id: YouthStoryId::new(story.id)?,
            name: PersonName::new(story.name)?,
            college: story.college.trim().to_string(),
            city: story.city.trim().to_string(),
            category: story.category.trim().to_string(),
            video_link,
            article,
            submitted_date: story.submitted_date,
            approved_date: story.approved_date,
        })
    }
}
