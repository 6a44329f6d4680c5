//! Core data model definitions shared across Obscura crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod inquiry;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{
    CatalogDocument, CatalogMetadata, Category, PortfolioItem, Photo,
    Testimonial,
};
pub use inquiry::InquiryRequest;
