//! # Rate Aggregation Service
//!
//! Orchestrates a single rate request end to end.
//!
//! The pipeline: validate the request, derive normalized units, evaluate
//! the lettermail tariff table (no network), then the network path —
//! fetch the exchange rate, call the carrier, normalize. A failing
//! carrier call degrades the response to tariff options only; it never
//! fails the request. Validation and configuration problems abort before
//! any network call is made.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::normalizer;
use crate::domain::entities::quote::RateQuote;
use crate::domain::entities::request::ShippingRequest;
use crate::domain::services::lettermail;
use crate::domain::value_objects::destination::{Destination, OriginMarket};
use crate::domain::value_objects::units::{to_grams, to_kilograms};
use crate::domain::value_objects::Dimensions;
use crate::infrastructure::carrier::error::CarrierResult;
use crate::infrastructure::carrier::request::normalize_origin_postal;
use crate::infrastructure::carrier::{CarrierApi, CarrierRateRequest};
use crate::infrastructure::fx::ExchangeRateSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The aggregated response: all quotes plus the origin postal code used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSheet {
    /// Tariff options first, then normalized carrier quotes.
    pub rates: Vec<RateQuote>,
    /// Normalized origin postal code the quotes were computed from.
    pub origin: String,
}

/// Orchestrator for rate aggregation.
pub struct RateAggregationService {
    market: OriginMarket,
    origin_postal_code: Option<String>,
    fx: Arc<dyn ExchangeRateSource>,
    carrier: Arc<dyn CarrierApi>,
}

impl RateAggregationService {
    /// Creates the service.
    ///
    /// `origin_postal_code` stays optional: its absence is reported per
    /// request as a configuration error, not at construction.
    #[must_use]
    pub fn new(
        market: OriginMarket,
        origin_postal_code: Option<String>,
        fx: Arc<dyn ExchangeRateSource>,
        carrier: Arc<dyn CarrierApi>,
    ) -> Self {
        Self {
            market,
            origin_postal_code,
            fx,
            carrier,
        }
    }

    /// Quotes all available shipping options for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for an incomplete request
    /// and [`ApplicationError::Configuration`] when no origin postal code
    /// is configured. Carrier failures are absorbed: the result then
    /// carries only the tariff options.
    pub async fn quote_rates(&self, request: &ShippingRequest) -> ApplicationResult<RateSheet> {
        let destination = request.validate(&self.market)?;

        let origin = self
            .origin_postal_code
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(normalize_origin_postal)
            .ok_or_else(ApplicationError::origin_not_configured)?;

        let weight = request.weight.unwrap_or_default();
        let unit = request.weight_unit();
        let weight_kg = to_kilograms(weight, unit);
        let weight_g = to_grams(weight, unit);
        let dimensions = Dimensions::from_optional(request.length, request.width, request.height);

        let mut rates = lettermail::evaluate(weight_g, &dimensions, &destination);

        match self
            .carrier_quotes(&destination, request, &origin, weight_kg, dimensions)
            .await
        {
            Ok(mut carrier_rates) => rates.append(&mut carrier_rates),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    destination = %destination,
                    "carrier quote failed, responding with tariff options only"
                );
            }
        }

        Ok(RateSheet { rates, origin })
    }

    /// The network path: exchange rate, carrier call, normalization.
    async fn carrier_quotes(
        &self,
        destination: &Destination,
        request: &ShippingRequest,
        origin: &str,
        weight_kg: f64,
        dimensions: Dimensions,
    ) -> CarrierResult<Vec<RateQuote>> {
        let fx_rate = self.fx.rate().await;
        let raw = self
            .carrier
            .rate(&CarrierRateRequest {
                origin_postal_code: origin.to_string(),
                destination: destination.clone(),
                postal_code: request.postal_code.clone(),
                weight_kg,
                dimensions,
            })
            .await?;
        Ok(normalizer::normalize(&raw, fx_rate))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::infrastructure::carrier::error::CarrierError;
    use crate::infrastructure::carrier::response::PriceQuotes;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct FixedRate {
        rate: Decimal,
        calls: AtomicUsize,
    }

    impl FixedRate {
        fn new(rate: Decimal) -> Arc<Self> {
            Arc::new(Self {
                rate,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ExchangeRateSource for FixedRate {
        async fn rate(&self) -> Decimal {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.rate
        }
    }

    #[derive(Debug)]
    struct ScriptedCarrier {
        body: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl ScriptedCarrier {
        fn responding(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                body: Some(body),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                body: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CarrierApi for ScriptedCarrier {
        async fn rate(&self, _request: &CarrierRateRequest) -> CarrierResult<PriceQuotes> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.body {
                Some(body) => Ok(quick_xml::de::from_str(body).unwrap()),
                None => Err(CarrierError::connection("carrier is down")),
            }
        }
    }

    const CARRIER_BODY: &str = r#"<price-quotes>
      <price-quote>
        <service-code>DOM.EP</service-code>
        <service-name>Expedited Parcel</service-name>
        <price-details>
          <base>10.00</base>
          <taxes><gst>0.50</gst></taxes>
          <due>10.00</due>
        </price-details>
      </price-quote>
    </price-quotes>"#;

    fn service(
        origin: Option<&str>,
        fx: Arc<FixedRate>,
        carrier: Arc<ScriptedCarrier>,
    ) -> RateAggregationService {
        RateAggregationService::new(
            OriginMarket::new("CA", "US"),
            origin.map(str::to_string),
            fx,
            carrier,
        )
    }

    fn lettermail_request() -> ShippingRequest {
        ShippingRequest {
            country: Some("CA".to_string()),
            street: Some("123 Main St".to_string()),
            city: Some("Ottawa".to_string()),
            province: Some("ON".to_string()),
            postal_code: Some("M5V 3L9".to_string()),
            weight: Some(15.0),
            weight_unit: Some("g".to_string()),
            length: Some(20.0),
            width: Some(12.0),
            height: Some(0.3),
        }
    }

    #[tokio::test]
    async fn merges_tariff_options_with_carrier_quotes() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::responding(CARRIER_BODY);
        let service = service(Some(" k2b 8j6 "), fx, carrier);

        let sheet = service.quote_rates(&lettermail_request()).await.unwrap();
        assert_eq!(sheet.origin, "K2B8J6");

        // Tariff options first (standard + oversize for 15 g), then the
        // carrier quote.
        assert_eq!(sheet.rates.len(), 3);
        assert!(sheet.rates[0].lettermail);
        assert!(sheet.rates[1].lettermail);
        let carrier_quote = &sheet.rates[2];
        assert_eq!(carrier_quote.service_code, "DOM.EP");
        assert_eq!(
            carrier_quote.price.total.amount(),
            Decimal::new(900, 2) // (10.00 + 2.00) * 0.75
        );
    }

    #[tokio::test]
    async fn carrier_failure_degrades_to_tariff_options() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::failing();
        let service = service(Some("K2B8J6"), fx, carrier.clone());

        let sheet = service.quote_rates(&lettermail_request()).await.unwrap();
        assert_eq!(carrier.calls.load(Ordering::SeqCst), 1);
        assert_eq!(sheet.rates.len(), 2);
        assert!(sheet.rates.iter().all(|r| r.lettermail));
    }

    #[tokio::test]
    async fn carrier_failure_with_no_tariff_options_is_still_ok() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::failing();
        let service = service(Some("K2B8J6"), fx, carrier);

        let mut request = lettermail_request();
        request.weight = Some(5.0);
        request.weight_unit = Some("kg".to_string());
        let sheet = service.quote_rates(&request).await.unwrap();
        assert!(sheet.rates.is_empty());
    }

    #[tokio::test]
    async fn validation_failure_precedes_any_network_call() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::responding(CARRIER_BODY);
        let service = service(Some("K2B8J6"), fx.clone(), carrier.clone());

        let mut request = lettermail_request();
        request.country = None;
        let err = service.quote_rates(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Validation(DomainError::MissingField("country"))
        ));
        assert_eq!(fx.calls.load(Ordering::SeqCst), 0);
        assert_eq!(carrier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_weight_is_rejected_before_network() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::responding(CARRIER_BODY);
        let service = service(Some("K2B8J6"), fx.clone(), carrier.clone());

        let mut request = lettermail_request();
        request.weight = None;
        let err = service.quote_rates(&request).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(fx.calls.load(Ordering::SeqCst), 0);
        assert_eq!(carrier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_origin_postal_code_is_a_configuration_error() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::responding(CARRIER_BODY);
        let service = service(None, fx, carrier.clone());

        let err = service.quote_rates(&lettermail_request()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert_eq!(carrier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_origin_postal_code_counts_as_missing() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::responding(CARRIER_BODY);
        let service = service(Some("   "), fx, carrier);

        let err = service.quote_rates(&lettermail_request()).await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn weight_unit_drives_tariff_eligibility() {
        let fx = FixedRate::new(Decimal::new(75, 2));
        let carrier = ScriptedCarrier::failing();
        let service = service(Some("K2B8J6"), fx, carrier);

        // 0.015 kg is 15 g: still lettermail-eligible.
        let mut request = lettermail_request();
        request.weight = Some(0.015);
        request.weight_unit = Some("kg".to_string());
        let sheet = service.quote_rates(&request).await.unwrap();
        assert_eq!(sheet.rates.len(), 2);
    }
}
