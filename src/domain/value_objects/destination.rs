//! # Destination Classification
//!
//! Three-way classification of a destination country relative to the
//! configured origin market.
//!
//! Tariff pricing, carrier request building and request validation all key
//! on the same classification, so the country comparison lives in exactly
//! one place.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::destination::{Destination, OriginMarket};
//!
//! let market = OriginMarket::new("CA", "US");
//! assert_eq!(market.classify("ca"), Destination::Domestic);
//! assert_eq!(market.classify("US"), Destination::TradingPartner);
//! assert_eq!(market.classify("GB"), Destination::International("GB".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The countries the system treats specially when classifying a
/// destination.
///
/// The domestic code and the trading-partner code are configuration, not
/// hardcoded; everything else is international.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginMarket {
    /// ISO-2 code treated as domestic.
    country: String,
    /// ISO-2 code of the primary trading partner.
    trading_partner: String,
}

impl OriginMarket {
    /// Creates an origin market from the domestic and trading-partner
    /// country codes. Codes are normalized to upper case.
    #[must_use]
    pub fn new(country: impl Into<String>, trading_partner: impl Into<String>) -> Self {
        Self {
            country: country.into().trim().to_ascii_uppercase(),
            trading_partner: trading_partner.into().trim().to_ascii_uppercase(),
        }
    }

    /// The domestic country code.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The trading-partner country code.
    #[inline]
    #[must_use]
    pub fn trading_partner(&self) -> &str {
        &self.trading_partner
    }

    /// Classifies a destination country code.
    ///
    /// Comparison is case-insensitive; unknown codes classify as
    /// [`Destination::International`] carrying the normalized code.
    #[must_use]
    pub fn classify(&self, country: &str) -> Destination {
        let code = country.trim().to_ascii_uppercase();
        if code == self.country {
            Destination::Domestic
        } else if code == self.trading_partner {
            Destination::TradingPartner
        } else {
            Destination::International(code)
        }
    }
}

/// A classified destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// Destination inside the origin market.
    Domestic,
    /// Destination in the origin market's primary trading partner.
    TradingPartner,
    /// Any other destination, carrying the normalized ISO-2 code.
    International(String),
}

impl Destination {
    /// Returns true for domestic destinations.
    #[inline]
    #[must_use]
    pub fn is_domestic(&self) -> bool {
        matches!(self, Self::Domestic)
    }

    /// Returns true for trading-partner destinations.
    #[inline]
    #[must_use]
    pub fn is_trading_partner(&self) -> bool {
        matches!(self, Self::TradingPartner)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domestic => write!(f, "domestic"),
            Self::TradingPartner => write!(f, "trading-partner"),
            Self::International(code) => write!(f, "international ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> OriginMarket {
        OriginMarket::new("CA", "US")
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(market().classify("ca"), Destination::Domestic);
        assert_eq!(market().classify("Ca "), Destination::Domestic);
        assert_eq!(market().classify("us"), Destination::TradingPartner);
    }

    #[test]
    fn unknown_codes_are_international() {
        assert_eq!(
            market().classify("gb"),
            Destination::International("GB".to_string())
        );
    }

    #[test]
    fn market_codes_are_normalized() {
        let market = OriginMarket::new(" ca", "us ");
        assert_eq!(market.country(), "CA");
        assert_eq!(market.trading_partner(), "US");
    }

    #[test]
    fn display_names_the_class() {
        assert_eq!(Destination::Domestic.to_string(), "domestic");
        assert_eq!(
            Destination::International("DE".to_string()).to_string(),
            "international (DE)"
        );
    }
}
