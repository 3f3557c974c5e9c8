use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, VideoLink, YouthStoryId};

/// An approved youth spotlight story.
///
/// `category` is a free-text label, not a reference to a catalog
/// [`Category`](crate::domain::category::Category). The video-or-article rule
/// applies to new submissions only and is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouthSpotlightStory {
    pub id: YouthStoryId,
    pub name: PersonName,
    pub college: String,
    pub city: String,
    pub category: String,
    pub video_link: Option<VideoLink>,
    pub article: Option<String>,
    pub submitted_date: NaiveDate,
    pub approved_date: NaiveDate,
}

impl YouthSpotlightStory {
    /// The video link, if it points at a recognised video host.
    pub fn renderable_video_link(&self) -> Option<&VideoLink> {
        self.video_link.as_ref().filter(|link| link.is_renderable())
    }
}
