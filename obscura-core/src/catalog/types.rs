use obscura_model::PortfolioItem;
use serde::Serialize;

/// One page of a category-filtered portfolio listing.
///
/// `pages` is the total page count for the active filter; an out-of-range
/// `page` request produces an empty `items` list, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a PortfolioItem>,
    pub total: usize,
    pub pages: usize,
}

/// Aggregate counts for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    /// Display name of the category, not its id.
    pub category: String,
    pub count: usize,
    pub total_photos: usize,
}

/// Catalog-wide statistics for the studio dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_items: usize,
    pub total_photos: usize,
    pub categories: Vec<CategoryStats>,
    /// Mean testimonial rating; `None` when the catalog holds no items.
    pub average_rating: Option<f64>,
}

/// Outcome of a full catalog consistency pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}
