//! # Configuration
//!
//! Typed application configuration loaded from environment variables.
//!
//! Variables are read with the `PARCEL_RATES` prefix and `__` as the
//! nesting separator, e.g. `PARCEL_RATES__CARRIER__USERNAME` or
//! `PARCEL_RATES__ORIGIN_POSTAL_CODE`. A `.env` file is honoured by the
//! binary through `dotenvy` before loading.
//!
//! The origin postal code is deliberately optional here: its absence is a
//! runtime server-error ("not configured") rather than a startup failure,
//! so the service can boot and report the misconfiguration per request.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// ISO-2 country code treated as domestic.
    #[serde(default = "default_origin_country")]
    pub origin_country: String,
    /// ISO-2 country code of the primary trading partner.
    #[serde(default = "default_trading_partner")]
    pub trading_partner: String,
    /// Postal code shipments originate from.
    #[serde(default)]
    pub origin_postal_code: Option<String>,
    /// Carrier rate-service settings.
    pub carrier: CarrierConfig,
    /// Currency rate-source settings.
    pub fx: FxConfig,
}

impl AppConfig {
    /// Loads configuration from prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a required variable is absent or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("PARCEL_RATES").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Carrier rate-service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierConfig {
    /// Carrier customer number embedded in rate requests.
    pub customer_number: String,
    /// Contract identifier for negotiated rates.
    #[serde(default)]
    pub contract_id: Option<String>,
    /// API username for Basic authentication.
    pub username: String,
    /// API password for Basic authentication.
    pub password: String,
    /// Which carrier gateway to talk to.
    #[serde(default)]
    pub environment: CarrierEnvironment,
    /// Full endpoint override; takes precedence over `environment` when
    /// set (used to point at a stub server).
    #[serde(default)]
    pub endpoint_override: Option<String>,
}

impl CarrierConfig {
    /// The rate endpoint URL to call.
    #[must_use]
    pub fn rate_endpoint(&self) -> String {
        match &self.endpoint_override {
            Some(url) => url.clone(),
            None => format!("{}/rs/ship/price", self.environment.base_url()),
        }
    }
}

/// Carrier gateway selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierEnvironment {
    /// Carrier test gateway.
    #[default]
    Sandbox,
    /// Carrier production gateway.
    Production,
}

impl CarrierEnvironment {
    /// Base URL of the selected gateway.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://ct.soa-gw.canadapost.ca",
            Self::Production => "https://soa-gw.canadapost.ca",
        }
    }
}

/// Currency rate-source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FxConfig {
    /// Quote endpoint returning a JSON rate document.
    pub endpoint: String,
    /// Fixed currency pair requested from the endpoint.
    #[serde(default = "default_fx_pair")]
    pub pair: String,
    /// Cache lifetime for a fetched rate, in seconds.
    #[serde(default = "default_fx_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_origin_country() -> String {
    "CA".to_string()
}

fn default_trading_partner() -> String {
    "US".to_string()
}

fn default_fx_pair() -> String {
    "CADUSD".to_string()
}

fn default_fx_cache_ttl_secs() -> u64 {
    3600
}
