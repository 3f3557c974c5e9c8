use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::personality::{Author, Personality};
use crate::models::youth_story::YouthSpotlightStory;

/// Top-level layout of the catalog JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub categories: Vec<Category>,
    pub personalities: Vec<Personality>,
    #[serde(default)]
    pub youth_stories: Vec<YouthSpotlightStory>,
    /// Curator credited on every personality that names none.
    #[serde(default)]
    pub default_author: Option<Author>,
    /// Personality highlighted on the home page.
    #[serde(default)]
    pub story_of_the_week: Option<String>,
}
