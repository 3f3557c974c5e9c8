//! Helpers for integration tests.
#![allow(dead_code)]

use std::io::Write;

use inspire_talks::domain::category::Category;
use inspire_talks::domain::personality::Personality;
use inspire_talks::domain::types::{
    CategoryName, CategorySlug, ImageSource, PersonName, PersonalityId,
};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Catalog JSON written to a temporary file.
pub struct TestCatalog {
    tempfile: NamedTempFile,
}

impl TestCatalog {
    pub fn new(catalog: &Value) -> Self {
        let mut tempfile = NamedTempFile::new().expect("Failed to create temp file");
        tempfile
            .write_all(catalog.to_string().as_bytes())
            .expect("Failed to write catalog");
        TestCatalog { tempfile }
    }

    pub fn path(&self) -> &std::path::Path {
        self.tempfile.path()
    }
}

pub fn category(slug: &str, name: &str) -> Category {
    Category {
        slug: CategorySlug::new(slug).expect("valid slug"),
        name: CategoryName::new(name).expect("valid name"),
        description: String::new(),
        icon: "✨".into(),
    }
}

pub fn personality(id: &str, category: &Category) -> Personality {
    Personality {
        id: PersonalityId::new(id).expect("valid id"),
        name: PersonName::new(id.replace('-', " ")).expect("valid name"),
        title: "Title".into(),
        category: category.name.clone(),
        category_slug: category.slug.clone(),
        image: ImageSource::new(format!("/assets/images/personalities/{id}.jpg"))
            .expect("valid image"),
        quote: "Quote".into(),
        story: "Story".into(),
        achievements: vec!["Achievement".into()],
        born: "1950".into(),
        profession: "Profession".into(),
        known_for: "Known for".into(),
        author: None,
        added_at: None,
        featured: false,
    }
}

/// Catalog record in the on-disk JSON layout.
pub fn personality_json(id: &str, slug: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": id.replace('-', " "),
        "title": "Title",
        "category": category,
        "categorySlug": slug,
        "image": format!("/assets/images/personalities/{id}.jpg"),
        "quote": "Quote",
        "story": "Story",
        "achievements": ["Achievement"],
        "born": "1950",
        "profession": "Profession",
        "knownFor": "Known for"
    })
}

/// Small valid catalog with two categories and three personalities.
pub fn catalog_json() -> Value {
    json!({
        "categories": [
            {"slug": "entrepreneurs", "name": "Entrepreneurs", "description": "Builders", "icon": "💼"},
            {"slug": "sports-icons", "name": "Sports Icons", "description": "Champions", "icon": "🏆"}
        ],
        "personalities": [
            personality_json("ratan-tata", "entrepreneurs", "Entrepreneurs"),
            personality_json("sachin-tendulkar", "sports-icons", "Sports Icons"),
            personality_json("dhirubhai-ambani", "entrepreneurs", "Entrepreneurs")
        ],
        "youthStories": [{
            "id": "youth-1",
            "name": "Priya Sharma",
            "college": "Delhi University",
            "city": "New Delhi",
            "category": "Social Impact",
            "article": "A community library.",
            "submittedDate": "2024-01-15",
            "approvedDate": "2024-01-20"
        }],
        "defaultAuthor": {"name": "Inspire India", "linkedin": "https://www.linkedin.com/company/inspire-india"},
        "storyOfTheWeek": "ratan-tata"
    })
}
