use serde::Serialize;

use crate::domain::youth_story::YouthSpotlightStory;
use crate::dto::personalities::format_card_date;

/// Characters of an article shown before the "Read more" toggle.
pub const ARTICLE_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YouthStoryDto {
    pub id: String,
    pub name: String,
    pub college: String,
    pub city: String,
    pub category: String,
    /// Present only for links on a recognised video host.
    pub video_link: Option<String>,
    /// Drive preview player, when the link carries a file id.
    pub embed_url: Option<String>,
    pub article: Option<String>,
    pub article_preview: Option<String>,
    pub article_truncated: bool,
    pub approved_date: String,
}

/// First `limit` characters of `text` and whether anything was cut.
fn preview(text: &str, limit: usize) -> (String, bool) {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => (text[..cut].trim_end().to_string(), true),
        None => (text.to_string(), false),
    }
}

impl From<&YouthSpotlightStory> for YouthStoryDto {
    fn from(value: &YouthSpotlightStory) -> Self {
        let video = value.renderable_video_link();
        let (article_preview, article_truncated) = match value.article.as_deref() {
            Some(article) => {
                let (text, truncated) = preview(article, ARTICLE_PREVIEW_CHARS);
                (Some(text), truncated)
            }
            None => (None, false),
        };

        Self {
            id: value.id.as_str().to_string(),
            name: value.name.as_str().to_string(),
            college: value.college.clone(),
            city: value.city.clone(),
            category: value.category.clone(),
            video_link: video.map(|link| link.as_str().to_string()),
            embed_url: video.and_then(|link| link.embed_url()),
            article: value.article.clone(),
            article_preview,
            article_truncated,
            approved_date: format_card_date(value.approved_date),
        }
    }
}
