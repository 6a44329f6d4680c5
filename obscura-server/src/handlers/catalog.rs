use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

use obscura_core::{CatalogStats, DEFAULT_PAGE_LIMIT};
use obscura_model::{CatalogDocument, Category, PortfolioItem};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Suggestions shown under a portfolio item when the client asks for none.
const DEFAULT_RELATED_LIMIT: usize = 3;

/// Full catalog document, gated on a clean validation pass.
pub async fn get_portfolio_handler(
    State(state): State<AppState>,
) -> AppResult<Json<CatalogDocument>> {
    let validation = state.catalog.validate();
    if !validation.is_valid {
        error!(
            error_count = validation.errors.len(),
            "portfolio catalog failed validation"
        );
        return Err(AppError::internal("Portfolio data validation failed")
            .with_errors(validation.errors));
    }

    Ok(Json(state.catalog.document().clone()))
}

/// Single item by slug.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PortfolioItem>> {
    match state.catalog.item_by_slug(&slug) {
        Some(item) => Ok(Json(item.clone())),
        None => {
            warn!(%slug, "portfolio item not found");
            Err(AppError::not_found("Portfolio item not found"))
        }
    }
}

pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Json<Vec<Category>> {
    Json(state.catalog.categories().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub category: Option<String>,
}

/// Paginated listing with an optional category filter.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Value>> {
    let page = state.catalog.paginate(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        query.category.as_deref(),
    );

    Ok(Json(
        serde_json::to_value(&page)
            .map_err(|err| AppError::internal(err.to_string()))?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Case-insensitive catalog search; a blank query matches nothing.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let results = state.catalog.search(query.q.as_deref().unwrap_or(""));

    Ok(Json(
        serde_json::to_value(&results)
            .map_err(|err| AppError::internal(err.to_string()))?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

/// Related items for the item at `slug`.
pub async fn related_items_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> AppResult<Json<Value>> {
    let Some(item) = state.catalog.item_by_slug(&slug) else {
        warn!(%slug, "related lookup for unknown portfolio item");
        return Err(AppError::not_found("Portfolio item not found"));
    };

    let related = state
        .catalog
        .related(item, query.limit.unwrap_or(DEFAULT_RELATED_LIMIT));

    Ok(Json(
        serde_json::to_value(&related)
            .map_err(|err| AppError::internal(err.to_string()))?,
    ))
}

pub async fn stats_handler(
    State(state): State<AppState>,
) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}
