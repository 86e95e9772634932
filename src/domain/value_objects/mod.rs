//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`Money`]: decimal monetary amount with display rounding and
//!   currency conversion
//! - [`Dimensions`]: parcel dimensions in cm with mm accessors
//! - [`OriginMarket`] / [`Destination`]: destination classification
//! - [`units`]: pure mass conversions between grams, kilograms and pounds

pub mod destination;
pub mod dimensions;
pub mod money;
pub mod units;

pub use destination::{Destination, OriginMarket};
pub use dimensions::Dimensions;
pub use money::Money;
