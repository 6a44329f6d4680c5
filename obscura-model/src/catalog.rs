use serde::{Deserialize, Serialize};

/// A portfolio category a visitor can browse by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A single photograph inside a portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// Client testimonial attached to a portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub rating: u8,
}

/// One published shoot in the studio portfolio.
///
/// `category` references a [`Category::id`]; `slug` is the URL-safe key the
/// site links by. Each entry is expected to carry exactly
/// [`PortfolioItem::EXPECTED_PHOTO_COUNT`] photos; deviations are surfaced by
/// catalog validation rather than rejected at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub slug: String,
    pub thumbnail: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub client: String,
    pub duration: String,
    pub services: Vec<String>,
    pub photos: Vec<Photo>,
    pub testimonial: Testimonial,
    pub tags: Vec<String>,
}

impl PortfolioItem {
    /// Every published entry ships a fixed-size gallery.
    pub const EXPECTED_PHOTO_COUNT: usize = 12;

    /// True when both entries carry at least one common tag.
    pub fn shares_tag_with(&self, other: &PortfolioItem) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

/// Document-level bookkeeping shipped with the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub total_items: usize,
    pub total_photos: usize,
    pub last_updated: String,
    pub version: String,
}

/// The top-level catalog document, deserialized once at startup and held
/// read-only for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub portfolio_items: Vec<PortfolioItem>,
    #[serde(default)]
    pub metadata: CatalogMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("/images/{id}.jpg"),
            alt: format!("photo {id}"),
            caption: String::new(),
        }
    }

    fn item(id: i64, tags: &[&str]) -> PortfolioItem {
        PortfolioItem {
            id,
            title: format!("Item {id}"),
            category: "wedding".to_string(),
            slug: format!("item-{id}"),
            thumbnail: String::new(),
            description: String::new(),
            location: String::new(),
            date: String::new(),
            client: String::new(),
            duration: String::new(),
            services: Vec::new(),
            photos: vec![photo("p1")],
            testimonial: Testimonial {
                text: String::new(),
                author: String::new(),
                rating: 5,
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn shares_tag_with_matches_on_any_common_tag() {
        let a = item(1, &["golden hour", "outdoor"]);
        let b = item(2, &["studio", "outdoor"]);
        let c = item(3, &["studio"]);

        assert!(a.shares_tag_with(&b));
        assert!(!a.shares_tag_with(&c));
    }

    #[test]
    fn document_tolerates_missing_collections() {
        let doc: CatalogDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.categories.is_empty());
        assert!(doc.portfolio_items.is_empty());
        assert_eq!(doc.metadata.total_items, 0);
    }

    #[test]
    fn document_uses_camel_case_wire_names() {
        let doc = CatalogDocument {
            portfolio_items: vec![item(7, &[])],
            ..CatalogDocument::default()
        };
        let raw = serde_json::to_value(&doc).unwrap();
        assert!(raw.get("portfolioItems").is_some());
        assert!(raw["metadata"].get("totalItems").is_some());
        assert_eq!(raw["portfolioItems"][0]["slug"], "item-7");
    }
}
