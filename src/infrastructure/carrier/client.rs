//! # Carrier Quote Client
//!
//! HTTPS client for the carrier's live rate service.
//!
//! The rate call is a POST of an XML mailing scenario with Basic
//! authentication. Success bodies parse into [`PriceQuotes`]; error
//! statuses parse the structured message body and surface as
//! [`CarrierError::Api`] instead of attempting price extraction. No retry
//! and no timeout beyond reqwest's transport defaults — callers impose
//! their own.

use crate::config::CarrierConfig;
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::request::{build_mailing_scenario, CarrierRateRequest};
use crate::infrastructure::carrier::response::{Messages, PriceQuotes};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

/// Content type of the carrier rate vocabulary.
pub const RATE_CONTENT_TYPE: &str = "application/vnd.cpc.ship.rate-v4+xml";

/// Trait seam for the carrier rate service.
///
/// The aggregation service depends on this trait so tests can substitute
/// a scripted carrier.
#[async_trait]
pub trait CarrierApi: Send + Sync {
    /// Requests rate quotes for a mailing scenario.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] when the remote call returns a
    /// non-success status or the body cannot be parsed.
    async fn rate(&self, request: &CarrierRateRequest) -> CarrierResult<PriceQuotes>;
}

/// Live HTTPS implementation of [`CarrierApi`].
#[derive(Debug, Clone)]
pub struct HttpCarrierClient {
    http: Client,
    config: CarrierConfig,
}

impl HttpCarrierClient {
    /// Creates a client for the configured carrier gateway.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Protocol`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: CarrierConfig) -> CarrierResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| CarrierError::protocol(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn map_reqwest_error(error: &reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::timeout("rate request timed out")
        } else if error.is_connect() {
            CarrierError::connection(format!("connection failed: {error}"))
        } else {
            CarrierError::connection(format!("rate request failed: {error}"))
        }
    }

    fn map_error_body(status: StatusCode, body: &str) -> CarrierError {
        if let Ok(messages) = quick_xml::de::from_str::<Messages>(body) {
            if let Some(message) = messages.messages.first() {
                return CarrierError::api(message.code.clone(), message.description.clone());
            }
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CarrierError::authentication(format!("authentication failed ({status})"))
            }
            _ => CarrierError::protocol(format!("HTTP error ({status}): {body}")),
        }
    }
}

#[async_trait]
impl CarrierApi for HttpCarrierClient {
    async fn rate(&self, request: &CarrierRateRequest) -> CarrierResult<PriceQuotes> {
        let body = build_mailing_scenario(
            &self.config.customer_number,
            self.config.contract_id.as_deref(),
            request,
        )?;

        let response = self
            .http
            .post(self.config.rate_endpoint())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, RATE_CONTENT_TYPE)
            .header(ACCEPT, RATE_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| Self::map_reqwest_error(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CarrierError::protocol(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(Self::map_error_body(status, &text));
        }

        quick_xml::de::from_str(&text)
            .map_err(|e| CarrierError::protocol(format!("failed to parse rate response: {e}")))
    }
}
