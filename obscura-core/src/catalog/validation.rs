use std::collections::{HashMap, HashSet};

use obscura_model::PortfolioItem;

use crate::catalog::store::CatalogStore;
use crate::catalog::types::CatalogValidation;

impl CatalogStore {
    /// Full consistency pass over the loaded document.
    ///
    /// Accumulates every problem instead of stopping at the first one, and
    /// never fails: invariant violations (photo counts, duplicate slugs,
    /// dangling category references) are reported, not corrected. Item
    /// positions in messages are 1-based.
    pub fn validate(&self) -> CatalogValidation {
        let mut errors = Vec::new();
        let document = self.document();

        if document.portfolio_items.is_empty() {
            errors.push(
                "Portfolio items array is missing or empty".to_string(),
            );
        }
        if document.categories.is_empty() {
            errors.push("Categories array is missing or empty".to_string());
        }

        let known_categories: HashSet<&str> = document
            .categories
            .iter()
            .map(|category| category.id.as_str())
            .collect();
        let mut seen_slugs: HashMap<&str, usize> = HashMap::new();

        for (index, item) in document.portfolio_items.iter().enumerate() {
            let position = index + 1;

            if item.slug.is_empty() {
                errors.push(format!("Portfolio item {position}: Missing slug"));
            } else if let Some(first) =
                seen_slugs.insert(item.slug.as_str(), position)
            {
                errors.push(format!(
                    "Portfolio item {position}: Duplicate slug '{}' (first used by item {first})",
                    item.slug
                ));
            }

            if item.title.is_empty() {
                errors
                    .push(format!("Portfolio item {position}: Missing title"));
            }

            if item.photos.is_empty() {
                errors.push(format!(
                    "Portfolio item {position}: No photos found"
                ));
            }
            if item.photos.len() != PortfolioItem::EXPECTED_PHOTO_COUNT {
                errors.push(format!(
                    "Portfolio item {position}: Expected {} photos, found {}",
                    PortfolioItem::EXPECTED_PHOTO_COUNT,
                    item.photos.len()
                ));
            }

            if !known_categories.contains(item.category.as_str()) {
                errors.push(format!(
                    "Portfolio item {position}: Unknown category '{}'",
                    item.category
                ));
            }
        }

        CatalogValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
