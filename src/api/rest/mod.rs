//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /api/v1/rates` - Quote all shipping options for a request
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use parcel_rates::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { service: /* ... */ });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
