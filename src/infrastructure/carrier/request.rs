//! # Carrier Rate Request
//!
//! Request payload building for the carrier's rate-v4 XML vocabulary.
//!
//! The mailing scenario embeds the customer (and optional contract)
//! credentials, parcel weight and dimensions, origin postal code, and a
//! destination descriptor keyed on the destination classification:
//! a `domestic` postal-code element, a `united-states` ZIP element, or an
//! `international` element with an optional postal code.

use crate::domain::value_objects::destination::Destination;
use crate::domain::value_objects::Dimensions;
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use serde::Serialize;

/// XML namespace of the carrier rate vocabulary.
pub const RATE_XMLNS: &str = "http://www.canadapost.ca/ws/ship/rate-v4";

/// Inputs for one carrier rate call.
///
/// The origin postal code is expected in raw form; building the payload
/// normalizes it (whitespace stripped, upper-cased). The destination
/// postal code is upper-cased for domestic destinations only and passed
/// through untouched otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierRateRequest {
    /// Origin postal code, raw.
    pub origin_postal_code: String,
    /// Classified destination.
    pub destination: Destination,
    /// Destination postal or ZIP code, raw.
    pub postal_code: Option<String>,
    /// Parcel weight in kilograms.
    pub weight_kg: f64,
    /// Parcel dimensions in centimetres.
    pub dimensions: Dimensions,
}

#[derive(Debug, Serialize)]
#[serde(rename = "mailing-scenario")]
struct MailingScenario {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "customer-number")]
    customer_number: String,
    #[serde(rename = "contract-id", skip_serializing_if = "Option::is_none")]
    contract_id: Option<String>,
    #[serde(rename = "parcel-characteristics")]
    parcel_characteristics: ParcelCharacteristics,
    #[serde(rename = "origin-postal-code")]
    origin_postal_code: String,
    destination: DestinationXml,
}

#[derive(Debug, Serialize)]
struct ParcelCharacteristics {
    weight: String,
    dimensions: DimensionsXml,
}

#[derive(Debug, Serialize)]
struct DimensionsXml {
    length: String,
    width: String,
    height: String,
}

/// One-of destination descriptor; exactly one field is populated.
#[derive(Debug, Default, Serialize)]
struct DestinationXml {
    #[serde(skip_serializing_if = "Option::is_none")]
    domestic: Option<DomesticXml>,
    #[serde(rename = "united-states", skip_serializing_if = "Option::is_none")]
    united_states: Option<UnitedStatesXml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    international: Option<InternationalXml>,
}

#[derive(Debug, Serialize)]
struct DomesticXml {
    #[serde(rename = "postal-code")]
    postal_code: String,
}

#[derive(Debug, Serialize)]
struct UnitedStatesXml {
    #[serde(rename = "zip-code")]
    zip_code: String,
}

#[derive(Debug, Serialize)]
struct InternationalXml {
    #[serde(rename = "country-code")]
    country_code: String,
    #[serde(rename = "postal-code", skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
}

/// Builds the XML mailing scenario for a rate call.
///
/// # Errors
///
/// Returns [`CarrierError::InvalidRequest`] when a domestic or
/// trading-partner destination has no postal code, and
/// [`CarrierError::Protocol`] if serialization fails.
pub fn build_mailing_scenario(
    customer_number: &str,
    contract_id: Option<&str>,
    request: &CarrierRateRequest,
) -> CarrierResult<String> {
    let destination = destination_descriptor(request)?;
    let scenario = MailingScenario {
        xmlns: RATE_XMLNS,
        customer_number: customer_number.to_string(),
        contract_id: contract_id.map(str::to_string),
        parcel_characteristics: ParcelCharacteristics {
            weight: format!("{:.3}", request.weight_kg),
            dimensions: DimensionsXml {
                length: format!("{:.1}", request.dimensions.length_cm()),
                width: format!("{:.1}", request.dimensions.width_cm()),
                height: format!("{:.1}", request.dimensions.height_cm()),
            },
        },
        origin_postal_code: normalize_origin_postal(&request.origin_postal_code),
        destination,
    };

    let body = quick_xml::se::to_string(&scenario)
        .map_err(|e| CarrierError::protocol(format!("failed to serialize rate request: {e}")))?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>{body}"))
}

/// Strips all whitespace and upper-cases a postal code.
pub fn normalize_origin_postal(postal: &str) -> String {
    postal
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

fn destination_descriptor(request: &CarrierRateRequest) -> CarrierResult<DestinationXml> {
    let postal = request.postal_code.as_deref();
    match &request.destination {
        Destination::Domestic => {
            let postal_code = postal
                .ok_or_else(|| CarrierError::invalid_request("domestic rate without postal code"))?
                .to_ascii_uppercase();
            Ok(DestinationXml {
                domestic: Some(DomesticXml { postal_code }),
                ..DestinationXml::default()
            })
        }
        Destination::TradingPartner => {
            let zip_code = postal
                .ok_or_else(|| {
                    CarrierError::invalid_request("trading-partner rate without ZIP code")
                })?
                .to_string();
            Ok(DestinationXml {
                united_states: Some(UnitedStatesXml { zip_code }),
                ..DestinationXml::default()
            })
        }
        Destination::International(code) => Ok(DestinationXml {
            international: Some(InternationalXml {
                country_code: code.clone(),
                postal_code: postal.map(str::to_string),
            }),
            ..DestinationXml::default()
        }),
    }
}
