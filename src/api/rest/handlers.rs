//! # REST Handlers
//!
//! Request/response types and handlers for the price endpoints.
//!
//! Handlers stay thin: parse and validate the query string, call the
//! [`PriceQueryService`], map the outcome to JSON.

use crate::api::rest::date_format::parse_query_date;
use crate::application::error::ApplicationError;
use crate::application::services::PriceQueryService;
use crate::domain::entities::PriceRecord;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{BrandId, ProductId, Timestamp};
use axum::Json;
use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query service backing every endpoint.
    pub service: PriceQueryService,
}

impl AppState {
    /// Wraps a service into shareable state.
    #[must_use]
    pub fn new(service: PriceQueryService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}

/// Query string of the final price endpoints.
///
/// Every field is optional at the extractor level so that missing and
/// malformed values produce the same JSON error body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQueryParams {
    /// Instant to resolve at.
    pub date: Option<String>,
    /// Product to price.
    pub product_id: Option<String>,
    /// Brand to price.
    pub brand_id: Option<String>,
}

/// Validated form of [`PriceQueryParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    /// Instant to resolve at.
    pub at: Timestamp,
    /// Product to price.
    pub product_id: ProductId,
    /// Brand to price.
    pub brand_id: BrandId,
}

impl PriceQueryParams {
    /// Validates the raw parameters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` for a missing parameter, an
    /// unparseable date, or a non-positive or non-numeric id.
    pub fn validate(&self) -> Result<PriceQuery, ApiError> {
        let date = required(self.date.as_deref(), "date")?;
        let at = parse_query_date(date).map_err(|e| ApiError::bad_request(e.to_string()))?;

        let product_id = required(self.product_id.as_deref(), "productId")?
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::bad_request("productId must be an integer"))?;
        let brand_id = required(self.brand_id.as_deref(), "brandId")?
            .trim()
            .parse::<i32>()
            .map_err(|_| ApiError::bad_request("brandId must be an integer"))?;

        Ok(PriceQuery {
            at,
            product_id: ProductId::positive(product_id)
                .map_err(|e| ApiError::bad_request(e.to_string()))?,
            brand_id: BrandId::positive(brand_id)
                .map_err(|e| ApiError::bad_request(e.to_string()))?,
        })
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("missing required parameter '{name}'")))
}

/// Price as returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Product id.
    pub product_id: i64,
    /// Brand id.
    pub brand_id: i32,
    /// Price list applied.
    pub price_list: i32,
    /// Start of the applied window.
    pub start_date: Timestamp,
    /// End of the applied window.
    pub end_date: Timestamp,
    /// Final price with its currency, e.g. `"25.45 EUR"`.
    pub final_price: String,
}

impl From<&PriceRecord> for PriceResponse {
    fn from(record: &PriceRecord) -> Self {
        Self {
            product_id: record.product_id().get(),
            brand_id: record.brand_id().get(),
            price_list: record.price_list_id().get(),
            start_date: record.start_date(),
            end_date: record.end_date(),
            final_price: record.display_price(),
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// When the error was produced.
    pub timestamp: Timestamp,
    /// What went wrong.
    pub message: String,
    /// Request the error belongs to.
    pub description: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"UP"` when the process answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Handler error, rendered as an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400.
    BadRequest {
        /// Client-facing message.
        message: String,
        /// Request path, filled in by the handler.
        description: String,
    },
    /// 404.
    NotFound {
        /// Client-facing message.
        message: String,
        /// Request path, filled in by the handler.
        description: String,
    },
    /// 500. Details are logged, not returned.
    Internal {
        /// Request path, filled in by the handler.
        description: String,
    },
}

impl ApiError {
    /// Creates a 400 error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            description: String::new(),
        }
    }

    /// Creates a 404 error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            description: String::new(),
        }
    }

    /// Attaches the request path.
    #[must_use]
    pub fn at(mut self, path: &str) -> Self {
        let description = match &mut self {
            Self::BadRequest { description, .. }
            | Self::NotFound { description, .. }
            | Self::Internal { description } => description,
        };
        *description = format!("uri={path}");
        self
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::PriceNotFound { .. } => Self::not_found(err.to_string()),
            ApplicationError::Validation(msg) => Self::bad_request(msg),
            ApplicationError::Domain(
                e @ (DomainError::InvalidIdentifier(_) | DomainError::InvalidTimestamp(_)),
            ) => Self::bad_request(e.to_string()),
            other => {
                error!(error = %other, "price query failed");
                Self::Internal {
                    description: String::new(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, description) = match self {
            Self::BadRequest {
                message,
                description,
            }
            | Self::NotFound {
                message,
                description,
            } => (message, description),
            Self::Internal { description } => ("Internal server error".to_string(), description),
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            timestamp: Timestamp::now(),
            message,
            description,
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /final-price`
///
/// # Errors
///
/// 400 on bad input, 404 when nothing applies, 500 on store failure.
pub async fn get_final_price(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<PriceQueryParams>,
) -> Result<Json<PriceResponse>, ApiError> {
    let query = params.validate().map_err(|e| e.at(uri.path()))?;
    info!(
        product_id = %query.product_id,
        brand_id = %query.brand_id,
        at = %query.at,
        "requesting final price"
    );

    let record = state
        .service
        .get_final_price(query.at, query.product_id, query.brand_id)
        .await
        .map_err(|e| ApiError::from(e).at(uri.path()))?;
    Ok(Json(PriceResponse::from(&record)))
}

/// `GET /final-price-convention`
///
/// # Errors
///
/// 400 on bad input, 404 when nothing applies, 500 on store failure.
pub async fn get_final_price_with_convention(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<PriceQueryParams>,
) -> Result<Json<PriceResponse>, ApiError> {
    let query = params.validate().map_err(|e| e.at(uri.path()))?;
    info!(
        product_id = %query.product_id,
        brand_id = %query.brand_id,
        at = %query.at,
        "requesting final price with convention"
    );

    let record = state
        .service
        .get_final_price_with_convention(query.at, query.product_id, query.brand_id)
        .await
        .map_err(|e| ApiError::from(e).at(uri.path()))?;
    Ok(Json(PriceResponse::from(&record)))
}

/// `GET /price-list-all`
///
/// # Errors
///
/// 500 on store failure.
pub async fn get_price_list_all(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<PriceResponse>>, ApiError> {
    info!("requesting all prices");

    let records = state
        .service
        .list_all_prices()
        .await
        .map_err(|e| ApiError::from(e).at(uri.path()))?;
    Ok(Json(records.iter().map(PriceResponse::from).collect()))
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "UP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
