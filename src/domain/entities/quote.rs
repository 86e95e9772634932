//! # Normalized Rate Quote
//!
//! The uniform quote shape every price source is mapped into.
//!
//! Carrier quotes and flat-rate lettermail tariff entries both end up as
//! [`RateQuote`] values, so the response is one homogeneous list no matter
//! which sources contributed.

use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};

/// Sentinel used when a quote carries no delivery estimate.
pub const NOT_AVAILABLE: &str = "N/A";

/// Per-quote price breakdown, all figures in the quote's currency at two
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price before taxes.
    pub base: Money,
    /// Goods and services tax.
    pub gst: Money,
    /// Provincial sales tax.
    pub pst: Money,
    /// Harmonized sales tax.
    pub hst: Money,
    /// Amount due. Derived independently of the other figures, so it need
    /// not equal their sum exactly.
    pub total: Money,
}

impl PriceBreakdown {
    /// Creates a flat-rate breakdown: no taxes, total equal to the base.
    #[must_use]
    pub fn flat(price: Money) -> Self {
        Self {
            base: price,
            gst: Money::zero(),
            pst: Money::zero(),
            hst: Money::zero(),
            total: price,
        }
    }
}

/// A single shipping option in the uniform response shape.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::entities::quote::RateQuote;
/// use parcel_rates::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let quote = RateQuote::flat_rate(
///     "Lettermail Standard",
///     "LM.STANDARD",
///     Money::new(Decimal::new(175, 2)),
///     "2-4",
///     "Max size 245 x 156 x 5 mm",
/// );
/// assert!(quote.lettermail);
/// assert_eq!(quote.price.total, quote.price.base);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    /// Human-readable service name.
    pub service_name: String,
    /// Stable service identifier.
    pub service_code: String,
    /// Price breakdown in `currency`.
    pub price: PriceBreakdown,
    /// Expected delivery date, or [`NOT_AVAILABLE`].
    pub delivery_date: String,
    /// Expected transit time in days (single value or range), or
    /// [`NOT_AVAILABLE`].
    pub transit_days: String,
    /// ISO currency code the breakdown is expressed in.
    pub currency: String,
    /// Marks a flat-rate lettermail tariff entry.
    #[serde(default, skip_serializing_if = "is_false")]
    pub lettermail: bool,
    /// Human-readable maximum-size note for tariff entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_note: Option<String>,
}

impl RateQuote {
    /// Creates a flat-rate lettermail entry.
    ///
    /// The breakdown carries no taxes and a total equal to the flat price;
    /// no delivery date is available for non-tracked mail.
    #[must_use]
    pub fn flat_rate(
        service_name: impl Into<String>,
        service_code: impl Into<String>,
        price: Money,
        transit_days: impl Into<String>,
        size_note: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_code: service_code.into(),
            price: PriceBreakdown::flat(price),
            delivery_date: NOT_AVAILABLE.to_string(),
            transit_days: transit_days.into(),
            currency: "CAD".to_string(),
            lettermail: true,
            size_note: Some(size_note.into()),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
