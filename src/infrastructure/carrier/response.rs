//! # Carrier Rate Response
//!
//! Parsed intermediate form of the carrier's rate-v4 XML response.
//!
//! A successful response is a `price-quotes` document containing one or
//! more `price-quote` records; deserializing into a `Vec` flattens the
//! singleton case. Tax fields appear in two shapes on the wire — a bare
//! numeric (`<gst>0.54</gst>`) or an attributed value
//! (`<gst percent="5">0.54</gst>`) — and both funnel through
//! [`TaxValue::amount`]. An error-status response carries a `messages`
//! document instead.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A parsed rate response: zero or more price-quote records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "price-quotes")]
pub struct PriceQuotes {
    /// The individual quotes; empty when the carrier offers no service.
    #[serde(rename = "price-quote", default)]
    pub quotes: Vec<PriceQuote>,
}

/// One quoted service.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuote {
    /// Stable carrier service identifier, e.g. `DOM.EP`.
    #[serde(rename = "service-code")]
    pub service_code: String,
    /// Human-readable service name.
    #[serde(rename = "service-name")]
    pub service_name: String,
    /// Price figures in the carrier's home currency.
    #[serde(rename = "price-details")]
    pub price_details: PriceDetails,
    /// Delivery estimate; absent for services without a standard.
    #[serde(rename = "service-standard", default)]
    pub service_standard: Option<ServiceStandard>,
}

/// Price figures for one quoted service.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceDetails {
    /// Base price before taxes.
    #[serde(with = "rust_decimal::serde::str")]
    pub base: Decimal,
    /// Tax components; any subset may be present.
    #[serde(default)]
    pub taxes: Option<Taxes>,
    /// Amount due as computed by the carrier.
    #[serde(with = "rust_decimal::serde::str")]
    pub due: Decimal,
}

/// Tax components of a price. Missing fields mean no tax of that kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Taxes {
    /// Goods and services tax.
    #[serde(default)]
    pub gst: Option<TaxValue>,
    /// Provincial sales tax.
    #[serde(default)]
    pub pst: Option<TaxValue>,
    /// Harmonized sales tax.
    #[serde(default)]
    pub hst: Option<TaxValue>,
}

impl Taxes {
    /// GST amount, zero when absent.
    #[must_use]
    pub fn gst_amount(&self) -> Decimal {
        self.gst.as_ref().map_or(Decimal::ZERO, TaxValue::amount)
    }

    /// PST amount, zero when absent.
    #[must_use]
    pub fn pst_amount(&self) -> Decimal {
        self.pst.as_ref().map_or(Decimal::ZERO, TaxValue::amount)
    }

    /// HST amount, zero when absent.
    #[must_use]
    pub fn hst_amount(&self) -> Decimal {
        self.hst.as_ref().map_or(Decimal::ZERO, TaxValue::amount)
    }
}

/// A tax figure as it appears on the wire: either a bare numeric element
/// or a value wrapped with a `percent` attribute. Both shapes extract
/// through [`TaxValue::amount`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxValue {
    /// Tax percentage attribute, when the wrapped form is used.
    #[serde(rename = "@percent", default)]
    pub percent: Option<String>,
    /// The tax amount; an empty element means zero.
    #[serde(rename = "$text", default, with = "rust_decimal::serde::str_option")]
    pub value: Option<Decimal>,
}

impl TaxValue {
    /// The tax amount, zero for an empty element.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.value.unwrap_or(Decimal::ZERO)
    }
}

/// Delivery estimate attached to a quoted service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceStandard {
    /// Expected delivery date, `YYYY-MM-DD`.
    #[serde(rename = "expected-delivery-date", default)]
    pub expected_delivery_date: Option<String>,
    /// Expected transit time in days.
    #[serde(rename = "expected-transit-time", default)]
    pub expected_transit_time: Option<String>,
}

/// Structured error body returned on non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "messages")]
pub struct Messages {
    /// The individual error messages.
    #[serde(rename = "message", default)]
    pub messages: Vec<ApiMessage>,
}

/// One carrier error message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Carrier error code.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<price-quotes xmlns="http://www.canadapost.ca/ws/ship/rate-v4">
  <price-quote>
    <service-code>DOM.EP</service-code>
    <service-name>Expedited Parcel</service-name>
    <price-details>
      <base>9.59</base>
      <taxes>
        <gst>0.48</gst>
        <pst/>
        <hst percent="13">1.25</hst>
      </taxes>
      <due>11.32</due>
    </price-details>
    <service-standard>
      <expected-delivery-date>2026-08-12</expected-delivery-date>
      <expected-transit-time>2</expected-transit-time>
    </service-standard>
  </price-quote>
  <price-quote>
    <service-code>DOM.RP</service-code>
    <service-name>Regular Parcel</service-name>
    <price-details>
      <base>8.01</base>
      <due>8.01</due>
    </price-details>
  </price-quote>
</price-quotes>"#;

    #[test]
    fn parses_multiple_quotes() {
        let parsed: PriceQuotes = quick_xml::de::from_str(RESPONSE).unwrap();
        assert_eq!(parsed.quotes.len(), 2);

        let first = &parsed.quotes[0];
        assert_eq!(first.service_code, "DOM.EP");
        assert_eq!(first.price_details.base, dec("9.59"));
        assert_eq!(first.price_details.due, dec("11.32"));

        let standard = first.service_standard.as_ref().unwrap();
        assert_eq!(standard.expected_delivery_date.as_deref(), Some("2026-08-12"));
        assert_eq!(standard.expected_transit_time.as_deref(), Some("2"));
    }

    #[test]
    fn tax_fields_parse_in_both_wire_shapes() {
        let parsed: PriceQuotes = quick_xml::de::from_str(RESPONSE).unwrap();
        let taxes = parsed.quotes[0].price_details.taxes.as_ref().unwrap();

        // Bare numeric form.
        assert_eq!(taxes.gst.as_ref().unwrap().amount(), dec("0.48"));
        // Empty element means zero.
        assert_eq!(taxes.pst.as_ref().unwrap().amount(), Decimal::ZERO);
        // Attribute-wrapped form.
        let hst = taxes.hst.as_ref().unwrap();
        assert_eq!(hst.amount(), dec("1.25"));
        assert_eq!(hst.percent.as_deref(), Some("13"));
    }

    #[test]
    fn missing_taxes_default_to_zero() {
        let parsed: PriceQuotes = quick_xml::de::from_str(RESPONSE).unwrap();
        let second = &parsed.quotes[1];
        assert!(second.price_details.taxes.is_none());
        assert_eq!(Taxes::default().gst_amount(), Decimal::ZERO);
        assert!(second.service_standard.is_none());
    }

    #[test]
    fn singleton_record_flattens_into_one_element_vec() {
        let xml = r#"<price-quotes>
          <price-quote>
            <service-code>USA.XP</service-code>
            <service-name>Xpresspost USA</service-name>
            <price-details><base>20.00</base><due>20.00</due></price-details>
          </price-quote>
        </price-quotes>"#;
        let parsed: PriceQuotes = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(parsed.quotes.len(), 1);
        assert_eq!(parsed.quotes[0].service_code, "USA.XP");
    }

    #[test]
    fn empty_document_has_no_quotes() {
        let parsed: PriceQuotes = quick_xml::de::from_str("<price-quotes/>").unwrap();
        assert!(parsed.quotes.is_empty());
    }

    #[test]
    fn parses_error_messages() {
        let xml = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
          <message>
            <code>AA004</code>
            <description>You cannot mail on behalf of the requested customer.</description>
          </message>
        </messages>"#;
        let parsed: Messages = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(parsed.messages.len(), 1);
        assert_eq!(parsed.messages[0].code, "AA004");
        assert!(parsed.messages[0].description.contains("cannot mail"));
    }
}
