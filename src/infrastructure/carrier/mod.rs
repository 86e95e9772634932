//! # Carrier Rate Service
//!
//! Client for the carrier's live rate API: request building, HTTPS
//! transport with Basic authentication, and response parsing into the
//! intermediate quote form.
//!
//! The XML wire vocabulary (rate-v4) is treated as an opaque carrier
//! contract; everything domain-shaped happens in the application layer.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{CarrierApi, HttpCarrierClient, RATE_CONTENT_TYPE};
pub use error::{CarrierError, CarrierResult};
pub use request::CarrierRateRequest;
pub use response::PriceQuotes;
