use crate::domain::personality::Personality;
use crate::repository::{CatalogRepository, PersonalityListQuery, PersonalityReader};

impl PersonalityReader for CatalogRepository {
    fn list_personalities(&self, query: PersonalityListQuery) -> Vec<&Personality> {
        let matching = self.personalities.iter().filter(|p| query.matches(p));
        match query.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    fn get_personality_by_id(&self, id: &str) -> Option<&Personality> {
        self.personality_index
            .get(id)
            .map(|&position| &self.personalities[position])
    }

    fn story_of_the_week(&self) -> Option<&Personality> {
        self.story_of_the_week
            .map(|position| &self.personalities[position])
    }
}
