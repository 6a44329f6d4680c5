use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    handlers::{catalog, inquiry},
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .merge(create_portfolio_routes())
        .merge(create_inquiry_routes())
}

/// Portfolio read endpoints. Static segments (`categories`, `items`, ...)
/// take priority over the `{slug}` capture, so those names are reserved and
/// never used as item slugs.
fn create_portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(catalog::get_portfolio_handler))
        .route(
            "/portfolio/categories",
            get(catalog::list_categories_handler),
        )
        .route("/portfolio/items", get(catalog::list_items_handler))
        .route("/portfolio/search", get(catalog::search_handler))
        .route("/portfolio/stats", get(catalog::stats_handler))
        .route("/portfolio/{slug}", get(catalog::get_item_handler))
        .route(
            "/portfolio/{slug}/related",
            get(catalog::related_items_handler),
        )
}

fn create_inquiry_routes() -> Router<AppState> {
    Router::new().route("/inquiries", post(inquiry::submit_inquiry_handler))
}
