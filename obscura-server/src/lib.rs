//! HTTP layer for the Obscura studio backend.
//!
//! Assembles the axum router: versioned API routes under `/api/v1`, the
//! `/ping` and `/health` operational endpoints, and the CORS/trace layers.
//! All domain logic lives in `obscura-core`; this crate only maps HTTP to it.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::{
    Config, ConfigLoad, ConfigLoader, ConfigWarning,
};
pub use infra::errors::{AppError, AppResult};

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();

    // Permissive CORS unless an origin allow-list is configured; the inquiry
    // form posts from the public site and needs its OPTIONS preflight served.
    let cors_layer = if state.config.cors.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .merge(versioned_api)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "ok",
        "message": format!("{} backend is running", state.config.studio_name),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let validation = state.catalog.validate();
    let catalog_status =
        if validation.is_valid { "healthy" } else { "unhealthy" };
    health_status["checks"]["catalog"] = json!({
        "status": catalog_status,
        "total_items": state.catalog.items().len(),
        "validation_errors": validation.errors.len()
    });

    // Mail being unconfigured degrades inquiries but the read API still
    // serves, so it is reported without flipping overall health.
    health_status["checks"]["mailer"] = json!({
        "configured": state.mailer_configured()
    });

    if validation.is_valid {
        Ok(Json(health_status))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
