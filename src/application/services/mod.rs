//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`rate_aggregation::RateAggregationService`]: end-to-end rate
//!   pipeline for one request
//! - [`normalizer`]: carrier response to uniform quote mapping

pub mod normalizer;
pub mod rate_aggregation;

pub use rate_aggregation::{RateAggregationService, RateSheet};
