use crate::dto::youth_stories::YouthStoryDto;
use crate::repository::YouthStoryReader;

use super::{ServiceError, ServiceResult};

/// Approved stories in definition order. Video links off the allow-list are
/// dropped from the output.
pub fn list_youth_stories<R>(repo: &R) -> Vec<YouthStoryDto>
where
    R: YouthStoryReader,
{
    repo.list_youth_stories()
        .iter()
        .map(YouthStoryDto::from)
        .collect()
}

pub fn get_youth_story<R>(id: &str, repo: &R) -> ServiceResult<YouthStoryDto>
where
    R: YouthStoryReader,
{
    repo.get_youth_story_by_id(id)
        .map(YouthStoryDto::from)
        .ok_or(ServiceError::NotFound)
}
