//! # REST Handlers
//!
//! Request handlers and response shapes for the rates API.
//!
//! Success responses carry the rate sheet as-is. Failures map onto the
//! error taxonomy: validation problems are 400s, a missing origin
//! configuration and unexpected failures are 500s, and a carrier outage
//! is not a failure at all — the sheet simply contains only tariff
//! options.

use crate::application::error::ApplicationError;
use crate::application::services::rate_aggregation::RateAggregationService;
use crate::domain::entities::request::ShippingRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the REST API.
pub struct AppState {
    /// The rate aggregation service.
    pub service: Arc<RateAggregationService>,
}

/// Error payload returned on any failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Diagnostic detail for unexpected failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves traffic.
    pub status: String,
}

/// `POST /api/v1/rates` — quotes all shipping options for a request.
pub async fn get_rates(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ShippingRequest>,
) -> Response {
    match state.service.quote_rates(&request).await {
        Ok(sheet) => (StatusCode::OK, Json(sheet)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// `GET /api/v1/health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(inner) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: inner.to_string(),
                    details: None,
                },
            ),
            Self::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: message.clone(),
                    details: None,
                },
            ),
            Self::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "internal server error".to_string(),
                    details: Some(detail.clone()),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
