//! Serialized representations read from the catalog file and configuration.

pub mod catalog;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod personality;
pub mod youth_story;
