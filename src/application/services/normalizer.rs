//! # Rate Normalizer
//!
//! Maps the carrier's intermediate response into the uniform quote shape,
//! applying the handling fee and currency conversion.
//!
//! Every money figure is converted by the exchange rate and rounded
//! half-up to two decimals independently. The total is computed from the
//! carrier's `due` amount plus the flat CAD handling fee, converted and
//! rounded on its own — so the displayed components will generally not
//! sum exactly to the displayed total. That is a deliberate display
//! simplification, not a bug to fix here.

use crate::domain::entities::quote::{PriceBreakdown, RateQuote, NOT_AVAILABLE};
use crate::domain::value_objects::Money;
use crate::infrastructure::carrier::response::{PriceQuotes, Taxes};
use rust_decimal::Decimal;

/// Flat handling fee in CAD added to every carrier-sourced quote before
/// conversion. Not applied to lettermail tariff entries.
#[must_use]
pub fn handling_fee_cad() -> Money {
    Money::new(Decimal::new(200, 2))
}

/// Currency carrier-sourced quotes are presented in.
pub const OUTPUT_CURRENCY: &str = "USD";

/// Normalizes a carrier response into uniform quotes.
///
/// An empty response yields an empty list. Tax fields missing from a
/// record contribute zero.
#[must_use]
pub fn normalize(raw: &PriceQuotes, fx_rate: Decimal) -> Vec<RateQuote> {
    raw.quotes
        .iter()
        .map(|quote| {
            let details = &quote.price_details;
            let taxes = details.taxes.clone().unwrap_or_default();
            let due_with_fee = Money::new(details.due) + handling_fee_cad();

            let (delivery_date, transit_days) = match &quote.service_standard {
                Some(standard) => (
                    standard
                        .expected_delivery_date
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    standard
                        .expected_transit_time
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ),
                None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
            };

            RateQuote {
                service_name: quote.service_name.clone(),
                service_code: quote.service_code.clone(),
                price: PriceBreakdown {
                    base: Money::new(details.base).convert(fx_rate),
                    gst: Money::new(taxes.gst_amount()).convert(fx_rate),
                    pst: Money::new(taxes.pst_amount()).convert(fx_rate),
                    hst: Money::new(taxes.hst_amount()).convert(fx_rate),
                    total: due_with_fee.convert(fx_rate),
                },
                delivery_date,
                transit_days,
                currency: OUTPUT_CURRENCY.to_string(),
                lettermail: false,
                size_note: None,
            }
        })
        .collect()
}
