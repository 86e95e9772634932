//! # Domain Entities
//!
//! The request and quote shapes flowing through the rate pipeline.
//!
//! - [`request::ShippingRequest`]: inbound quote request with ordered
//!   validation
//! - [`quote::RateQuote`]: the uniform quote shape every price source is
//!   normalized into

pub mod quote;
pub mod request;

pub use quote::{PriceBreakdown, RateQuote, NOT_AVAILABLE};
pub use request::ShippingRequest;
