//! # parcel-rates
//!
//! Shipping rate aggregation engine.
//!
//! Quotes shipping prices for a parcel or letter sent from a fixed
//! origin to a destination address by combining three price sources:
//!
//! - the carrier's live rate API (XML over HTTPS)
//! - a flat-rate lettermail tariff table encoded as local business rules
//! - a cached CAD→USD conversion rate used to present carrier prices in
//!   the output currency
//!
//! The pipeline validates the request, converts units, evaluates the
//! tariff table (always available, no network), then fetches the
//! exchange rate and carrier quotes and normalizes everything into one
//! uniform quote shape. A carrier outage degrades the response to
//! tariff options only; it never fails the request.
//!
//! # Architecture
//!
//! - [`domain`]: pure business types and rules
//! - [`application`]: the aggregation pipeline and error taxonomy
//! - [`infrastructure`]: carrier and currency-rate adapters
//! - [`api`]: REST surface
//! - [`config`]: environment-driven configuration

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
