use crate::domain::category::Category;
use crate::repository::{CatalogRepository, CategoryReader};

impl CategoryReader for CatalogRepository {
    fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.category_index
            .get(slug)
            .map(|&position| &self.categories[position])
    }
}
