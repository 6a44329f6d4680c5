use std::path::Path;

use obscura_model::{CatalogDocument, Category, PortfolioItem};
use tracing::info;

use crate::catalog::types::{CatalogStats, CategoryStats, Page};
use crate::error::Result;

/// The catalog document compiled into the binary. `CATALOG_PATH` can point at
/// an alternative document on disk for staging content.
const EMBEDDED_CATALOG: &str = include_str!("../../data/portfolio.json");

/// Category filter sentinel meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Page size the portfolio grid requests when the client sends none.
pub const DEFAULT_PAGE_LIMIT: usize = 6;

/// Immutable snapshot of the portfolio catalog plus its query operations.
///
/// Constructed once at startup and shared behind an `Arc`; there is no write
/// path, so concurrent readers need no synchronization.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    document: CatalogDocument,
}

impl CatalogStore {
    /// Wrap an already-deserialized document.
    pub fn new(document: CatalogDocument) -> Self {
        Self { document }
    }

    /// Load from `path` when given, otherwise from the embedded document.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                info!("loading embedded portfolio catalog");
                Self::from_json(EMBEDDED_CATALOG)
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading portfolio catalog from file");
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }

    /// All portfolio items in source order.
    pub fn items(&self) -> &[PortfolioItem] {
        &self.document.portfolio_items
    }

    /// Exact-match lookup by slug.
    pub fn item_by_slug(&self, slug: &str) -> Option<&PortfolioItem> {
        self.items().iter().find(|item| item.slug == slug)
    }

    /// Items belonging to `category`, in source order. The
    /// [`ALL_CATEGORIES`] sentinel returns everything.
    pub fn items_by_category(&self, category: &str) -> Vec<&PortfolioItem> {
        if category == ALL_CATEGORIES {
            return self.items().iter().collect();
        }
        self.items()
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn categories(&self) -> &[Category] {
        &self.document.categories
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|category| category.id == id)
    }

    /// One 1-indexed page of the (optionally category-filtered) listing.
    ///
    /// The filter is applied before slicing, `pages` is `ceil(total/limit)`,
    /// and an out-of-range page yields an empty item list. `limit == 0`
    /// produces an empty page with zero pages rather than dividing by zero.
    pub fn paginate(
        &self,
        page: usize,
        limit: usize,
        category: Option<&str>,
    ) -> Page<'_> {
        let filtered = match category {
            Some(id) => self.items_by_category(id),
            None => self.items().iter().collect(),
        };

        let total = filtered.len();
        if limit == 0 {
            return Page {
                items: Vec::new(),
                total,
                pages: 0,
            };
        }

        let pages = total.div_ceil(limit);
        let start = page.saturating_sub(1).saturating_mul(limit);
        let items = filtered.into_iter().skip(start).take(limit).collect();

        Page {
            items,
            total,
            pages,
        }
    }

    /// Case-insensitive substring search over title, description, location,
    /// client, and tags. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&PortfolioItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.items()
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
                    || item.location.to_lowercase().contains(&needle)
                    || item.client.to_lowercase().contains(&needle)
                    || item
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Up to `limit` suggestions for `current`: same-category items first,
    /// then items sharing a tag, both in source order and excluding
    /// `current` itself. Fully deterministic.
    pub fn related(
        &self,
        current: &PortfolioItem,
        limit: usize,
    ) -> Vec<&PortfolioItem> {
        let mut related: Vec<&PortfolioItem> = self
            .items()
            .iter()
            .filter(|item| {
                item.category == current.category && item.id != current.id
            })
            .collect();

        if related.len() < limit {
            let backfill: Vec<&PortfolioItem> = self
                .items()
                .iter()
                .filter(|item| {
                    item.id != current.id
                        && !related.iter().any(|seen| seen.id == item.id)
                        && item.shares_tag_with(current)
                })
                .collect();
            related.extend(backfill);
        }

        related.truncate(limit);
        related
    }

    /// Aggregate statistics: item/photo totals from the document metadata,
    /// per-category counts computed by filtering, and the mean testimonial
    /// rating (`None` on an empty catalog).
    pub fn stats(&self) -> CatalogStats {
        let items = self.items();

        let categories = self
            .categories()
            .iter()
            .map(|category| {
                let in_category: Vec<&PortfolioItem> = items
                    .iter()
                    .filter(|item| item.category == category.id)
                    .collect();
                CategoryStats {
                    category: category.name.clone(),
                    count: in_category.len(),
                    total_photos: in_category
                        .iter()
                        .map(|item| item.photos.len())
                        .sum(),
                }
            })
            .collect();

        let average_rating = if items.is_empty() {
            None
        } else {
            let sum: f64 = items
                .iter()
                .map(|item| f64::from(item.testimonial.rating))
                .sum();
            Some(sum / items.len() as f64)
        };

        CatalogStats {
            total_items: self.document.metadata.total_items,
            total_photos: self.document.metadata.total_photos,
            categories,
            average_rating,
        }
    }
}
