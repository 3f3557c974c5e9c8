use crate::domain::youth_story::YouthSpotlightStory;
use crate::repository::{CatalogRepository, YouthStoryReader};

impl YouthStoryReader for CatalogRepository {
    fn list_youth_stories(&self) -> &[YouthSpotlightStory] {
        &self.youth_stories
    }

    fn get_youth_story_by_id(&self, id: &str) -> Option<&YouthSpotlightStory> {
        self.youth_story_index
            .get(id)
            .map(|&position| &self.youth_stories[position])
    }
}
