//! # Lettermail Tariff Table
//!
//! Flat-rate tariff evaluation for small and light mail.
//!
//! Lettermail prices come from local business rules, never from the live
//! carrier service. Evaluation is pure and deterministic: two independent
//! tiers are checked against the parcel's millimetre dimensions and gram
//! weight, and each eligible tier contributes one flat-rate entry, so a
//! single parcel yields zero, one or two options.
//!
//! A parcel outside a tier's bounds is simply excluded from that tier;
//! there is no error path.

use crate::domain::entities::quote::RateQuote;
use crate::domain::value_objects::destination::Destination;
use crate::domain::value_objects::{Dimensions, Money};
use rust_decimal::Decimal;

/// Standard-tier envelope limits, millimetres and grams.
mod standard {
    pub const MIN_LENGTH_MM: f64 = 140.0;
    pub const MAX_LENGTH_MM: f64 = 245.0;
    pub const MIN_WIDTH_MM: f64 = 90.0;
    pub const MAX_WIDTH_MM: f64 = 156.0;
    pub const MAX_HEIGHT_MM: f64 = 5.0;
    pub const MIN_WEIGHT_G: f64 = 2.0;
    pub const MAX_WEIGHT_G: f64 = 30.0;
}

/// Oversize-tier envelope limits, millimetres and grams.
mod oversize {
    pub const MAX_LENGTH_MM: f64 = 380.0;
    pub const MAX_WIDTH_MM: f64 = 270.0;
    pub const MAX_HEIGHT_MM: f64 = 20.0;
    pub const MIN_WEIGHT_G: f64 = 5.0;
    pub const MAX_WEIGHT_G: f64 = 500.0;
}

/// Evaluates the tariff table for a parcel.
///
/// `weight_grams` is the parcel mass in grams; dimensions are taken in
/// centimetres and checked in millimetres. Returns the eligible flat-rate
/// entries, standard tier first.
#[must_use]
pub fn evaluate(
    weight_grams: f64,
    dimensions: &Dimensions,
    destination: &Destination,
) -> Vec<RateQuote> {
    let mut options = Vec::with_capacity(2);

    if standard_eligible(weight_grams, dimensions) {
        options.push(RateQuote::flat_rate(
            "Lettermail Standard",
            "LM.STANDARD",
            standard_price(destination),
            standard_transit(destination),
            "Max size 245 x 156 x 5 mm",
        ));
    }

    if oversize_eligible(weight_grams, dimensions) {
        options.push(RateQuote::flat_rate(
            "Lettermail Oversize",
            "LM.OVERSIZE",
            oversize_price(weight_grams, destination),
            oversize_transit(destination),
            "Max size 380 x 270 x 20 mm",
        ));
    }

    options
}

fn standard_eligible(weight_grams: f64, dims: &Dimensions) -> bool {
    let (l, w, h) = (dims.length_mm(), dims.width_mm(), dims.height_mm());
    l >= standard::MIN_LENGTH_MM
        && l <= standard::MAX_LENGTH_MM
        && w >= standard::MIN_WIDTH_MM
        && w <= standard::MAX_WIDTH_MM
        && h <= standard::MAX_HEIGHT_MM
        && weight_grams >= standard::MIN_WEIGHT_G
        && weight_grams <= standard::MAX_WEIGHT_G
}

fn oversize_eligible(weight_grams: f64, dims: &Dimensions) -> bool {
    dims.length_mm() <= oversize::MAX_LENGTH_MM
        && dims.width_mm() <= oversize::MAX_WIDTH_MM
        && dims.height_mm() <= oversize::MAX_HEIGHT_MM
        && weight_grams >= oversize::MIN_WEIGHT_G
        && weight_grams <= oversize::MAX_WEIGHT_G
}

fn standard_price(destination: &Destination) -> Money {
    let cents = match destination {
        Destination::Domestic => 175,
        Destination::TradingPartner => 200,
        Destination::International(_) => 350,
    };
    Money::new(Decimal::new(cents, 2))
}

fn standard_transit(destination: &Destination) -> &'static str {
    match destination {
        Destination::Domestic => "2-4",
        Destination::TradingPartner => "4-7",
        Destination::International(_) => "7-14",
    }
}

/// Oversize price is a step function of weight, distinct per destination
/// class.
fn oversize_price(weight_grams: f64, destination: &Destination) -> Money {
    let cents = match destination {
        Destination::Domestic => match weight_grams {
            w if w <= 100.0 => 311,
            w if w <= 200.0 => 451,
            w if w <= 300.0 => 591,
            w if w <= 400.0 => 662,
            _ => 705,
        },
        Destination::TradingPartner => match weight_grams {
            w if w <= 100.0 => 451,
            w if w <= 200.0 => 716,
            _ => 1338,
        },
        Destination::International(_) => match weight_grams {
            w if w <= 100.0 => 808,
            w if w <= 200.0 => 1338,
            _ => 2580,
        },
    };
    Money::new(Decimal::new(cents, 2))
}

fn oversize_transit(destination: &Destination) -> &'static str {
    match destination {
        Destination::Domestic => "2-5",
        Destination::TradingPartner => "5-10",
        Destination::International(_) => "10-21",
    }
}
