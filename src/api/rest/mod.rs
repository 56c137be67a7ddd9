//! # REST API
//!
//! HTTP surface over the price query service.
//!
//! # Endpoints
//!
//! - `GET /api/v1/rest/prices/final-price?date=&productId=&brandId=`
//! - `GET /api/v1/rest/prices/final-price-convention?date=&productId=&brandId=`
//! - `GET /api/v1/rest/prices/price-list-all`
//! - `GET /health`
//!
//! Errors share one body:
//!
//! ```json
//! { "statusCode": 404, "timestamp": "2020-06-14 10:00:00",
//!   "message": "...", "description": "uri=/api/v1/rest/prices/final-price" }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use price_resolver::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState::new(service));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod date_format;
pub mod handlers;
pub mod routes;

pub use date_format::{InvalidDateFormat, parse_query_date};
pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, PriceQuery, PriceQueryParams,
    PriceResponse,
};
pub use routes::{PRICES_BASE_PATH, create_router};
