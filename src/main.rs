//! # parcel-rates server
//!
//! Binary entrypoint: loads configuration, wires the carrier client and
//! currency rate provider into the aggregation service, and serves the
//! REST API.

use anyhow::Context;
use parcel_rates::api::rest::{create_router, AppState};
use parcel_rates::application::services::rate_aggregation::RateAggregationService;
use parcel_rates::config::AppConfig;
use parcel_rates::domain::value_objects::destination::OriginMarket;
use parcel_rates::infrastructure::carrier::HttpCarrierClient;
use parcel_rates::infrastructure::fx::{HttpRateProvider, SystemClock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let carrier = Arc::new(
        HttpCarrierClient::new(config.carrier.clone())
            .context("failed to create carrier client")?,
    );
    let fx = Arc::new(HttpRateProvider::new(
        config.fx.clone(),
        Arc::new(SystemClock),
    ));
    let service = Arc::new(RateAggregationService::new(
        OriginMarket::new(&config.origin_country, &config.trading_partner),
        config.origin_postal_code.clone(),
        fx,
        carrier,
    ));

    let router = create_router(Arc::new(AppState { service }));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "parcel-rates listening");
    axum::serve(listener, router).await?;
    Ok(())
}
