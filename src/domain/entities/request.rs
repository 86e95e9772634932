//! # Shipping Request
//!
//! The inbound quote request and its validation rules.
//!
//! Every field arrives optional so that validation, not deserialization,
//! decides what is missing and reports it in a stable order. Validation
//! runs before any network call; the first failure wins.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::destination::{Destination, OriginMarket};
use serde::{Deserialize, Serialize};

/// A request for shipping rates to a destination address.
///
/// Weight is a bare number plus a unit string (`g`, `kg` or `lb`);
/// dimensions are centimetres. Street, city and province are
/// presence-validated only, never parsed.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::entities::request::ShippingRequest;
/// use parcel_rates::domain::value_objects::destination::{Destination, OriginMarket};
///
/// let request = ShippingRequest {
///     country: Some("CA".to_string()),
///     street: Some("123 Main St".to_string()),
///     city: Some("Ottawa".to_string()),
///     province: Some("ON".to_string()),
///     postal_code: Some("K1A 0B1".to_string()),
///     weight: Some(1.5),
///     weight_unit: Some("kg".to_string()),
///     length: None,
///     width: None,
///     height: None,
/// };
/// let market = OriginMarket::new("CA", "US");
/// assert_eq!(request.validate(&market).unwrap(), Destination::Domestic);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    /// Destination country code (ISO-2).
    pub country: Option<String>,
    /// Destination street address.
    pub street: Option<String>,
    /// Destination city.
    pub city: Option<String>,
    /// Destination province or state.
    pub province: Option<String>,
    /// Destination postal or ZIP code.
    pub postal_code: Option<String>,
    /// Parcel weight, in `weight_unit` units.
    pub weight: Option<f64>,
    /// Weight unit string: `g`, `kg` or `lb`. Missing defaults to `kg`.
    pub weight_unit: Option<String>,
    /// Parcel length in centimetres.
    pub length: Option<f64>,
    /// Parcel width in centimetres.
    pub width: Option<f64>,
    /// Parcel height in centimetres.
    pub height: Option<f64>,
}

impl ShippingRequest {
    /// Validates the request against the origin market and classifies the
    /// destination.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. `country` and `weight` present
    /// 2. `street`, `city`, `province` present
    /// 3. domestic destinations require `postalCode`
    /// 4. trading-partner destinations require `postalCode`
    ///
    /// International destinations do not require a postal code.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] naming the first absent field.
    pub fn validate(&self, market: &OriginMarket) -> DomainResult<Destination> {
        let country = self
            .country
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(DomainError::missing_field("country"))?;
        if self.weight.is_none() {
            return Err(DomainError::missing_field("weight"));
        }
        if !present(&self.street) {
            return Err(DomainError::missing_field("street"));
        }
        if !present(&self.city) {
            return Err(DomainError::missing_field("city"));
        }
        if !present(&self.province) {
            return Err(DomainError::missing_field("province"));
        }

        let destination = market.classify(country);
        match destination {
            Destination::Domestic | Destination::TradingPartner => {
                if !present(&self.postal_code) {
                    return Err(DomainError::missing_field("postalCode"));
                }
            }
            Destination::International(_) => {}
        }
        Ok(destination)
    }

    /// The weight unit string, defaulting to kilograms when absent.
    #[must_use]
    pub fn weight_unit(&self) -> &str {
        self.weight_unit.as_deref().unwrap_or("kg")
    }
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
