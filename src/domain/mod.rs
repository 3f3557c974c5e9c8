//! Catalog entities and the value objects they are built from.

pub mod category;
pub mod personality;
pub mod relay;
pub mod types;
pub mod youth_story;
