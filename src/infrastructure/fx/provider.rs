//! # Currency Rate Provider
//!
//! Fetches the CAD→USD conversion rate from a remote quote source, with a
//! process-lifetime cache and a hardcoded fallback.
//!
//! The provider never fails: every failure path resolves to a numeric
//! rate. A fresh cache entry short-circuits the network entirely; on a
//! fetch failure the last cached value is returned, and with an empty
//! cache the [`FALLBACK_RATE_CENTS`] constant (0.73) is used. The remote
//! document carries the rate under one of two field names; the primary
//! field is preferred.

use crate::config::FxConfig;
use crate::infrastructure::fx::cache::RateCache;
use crate::infrastructure::fx::clock::Clock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Fallback CAD→USD rate in hundredths, used when no fetch has ever
/// succeeded.
pub const FALLBACK_RATE_CENTS: i64 = 73;

/// The fallback rate as a decimal (0.73).
#[must_use]
pub fn fallback_rate() -> Decimal {
    Decimal::new(FALLBACK_RATE_CENTS, 2)
}

/// Trait seam for the currency rate source.
///
/// Grounded contract: the returned rate is always usable — callers never
/// handle an error from this seam.
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// The current CAD→USD multiplier.
    async fn rate(&self) -> Decimal;
}

/// Remote quote document. The rate appears under `rate` (primary) or
/// `price` (secondary).
#[derive(Debug, Deserialize)]
struct RateDocument {
    #[serde(default)]
    rate: Option<Decimal>,
    #[serde(default)]
    price: Option<Decimal>,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rate source returned HTTP {0}")]
    Status(u16),
    #[error("rate document carries no rate field")]
    MissingRate,
}

/// Live HTTP implementation of [`ExchangeRateSource`].
#[derive(Debug)]
pub struct HttpRateProvider {
    http: Client,
    endpoint: String,
    pair: String,
    cache: RateCache,
    clock: Arc<dyn Clock>,
}

impl HttpRateProvider {
    /// Creates a provider with an empty cache.
    #[must_use]
    pub fn new(config: FxConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint,
            pair: config.pair,
            cache: RateCache::new(config.cache_ttl_secs),
            clock,
        }
    }

    async fn fetch(&self, now: DateTime<Utc>) -> Result<Decimal, FetchError> {
        // The quote source is parameterized by the calendar date.
        let date = now.format("%m/%d/%Y").to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("pair", self.pair.as_str()), ("date", date.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let document: RateDocument = response.json().await?;
        document
            .rate
            .or(document.price)
            .ok_or(FetchError::MissingRate)
    }
}

#[async_trait]
impl ExchangeRateSource for HttpRateProvider {
    async fn rate(&self) -> Decimal {
        let now = self.clock.now();
        if let Some(rate) = self.cache.fresh(now) {
            return rate;
        }

        match self.fetch(now).await {
            Ok(rate) => {
                self.cache.store(rate, now);
                rate
            }
            Err(error) => {
                let substitute = self.cache.last().unwrap_or_else(fallback_rate);
                tracing::warn!(
                    error = %error,
                    rate = %substitute,
                    "exchange-rate fetch failed, using last known rate"
                );
                substitute
            }
        }
    }
}
