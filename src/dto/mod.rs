//! Flat, serializable views of catalog entities for templates and the JSON API.

pub mod categories;
pub mod personalities;
pub mod youth_stories;
