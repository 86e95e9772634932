//! # REST Routes
//!
//! Router assembly for the rates API.

use crate::api::rest::handlers::{get_rates, health, AppState};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the API router.
///
/// Routes:
/// - `POST /api/v1/rates`
/// - `GET /api/v1/health`
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/rates", post(get_rates))
        .route("/api/v1/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::rate_aggregation::RateAggregationService;
    use crate::domain::value_objects::destination::OriginMarket;
    use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
    use crate::infrastructure::carrier::response::PriceQuotes;
    use crate::infrastructure::carrier::{CarrierApi, CarrierRateRequest};
    use crate::infrastructure::fx::ExchangeRateSource;
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    #[derive(Debug)]
    struct StubRate;

    #[async_trait]
    impl ExchangeRateSource for StubRate {
        async fn rate(&self) -> Decimal {
            Decimal::new(75, 2)
        }
    }

    #[derive(Debug)]
    struct DownCarrier;

    #[async_trait]
    impl CarrierApi for DownCarrier {
        async fn rate(&self, _request: &CarrierRateRequest) -> CarrierResult<PriceQuotes> {
            Err(CarrierError::connection("down"))
        }
    }

    #[test]
    fn router_assembles() {
        let state = Arc::new(AppState {
            service: Arc::new(RateAggregationService::new(
                OriginMarket::new("CA", "US"),
                Some("K2B8J6".to_string()),
                Arc::new(StubRate),
                Arc::new(DownCarrier),
            )),
        });
        let _router = create_router(state);
    }
}
