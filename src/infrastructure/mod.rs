//! # Infrastructure Layer
//!
//! Adapters for the external price sources: the carrier's XML rate
//! service and the JSON currency quote source. Both are reached over
//! plain HTTPS with no retries, no pooling beyond transport defaults,
//! and no timeout beyond what the transport imposes.

pub mod carrier;
pub mod fx;
