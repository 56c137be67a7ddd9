//! # REST Routes
//!
//! Router wiring for the price endpoints.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Mount point of the price endpoints.
pub const PRICES_BASE_PATH: &str = "/api/v1/rest/prices";

/// Builds the application router.
///
/// ```text
/// GET /api/v1/rest/prices/final-price
/// GET /api/v1/rest/prices/final-price-convention
/// GET /api/v1/rest/prices/price-list-all
/// GET /health
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let prices = Router::new()
        .route("/final-price", get(handlers::get_final_price))
        .route(
            "/final-price-convention",
            get(handlers::get_final_price_with_convention),
        )
        .route("/price-list-all", get(handlers::get_price_list_all));

    Router::new()
        .nest(PRICES_BASE_PATH, prices)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
