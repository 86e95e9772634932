//! # Parcel Dimensions
//!
//! Parcel dimensions in centimetres, with millimetre accessors for
//! tariff-threshold checks.
//!
//! Inbound requests may omit any side; a missing side defaults to 10 cm,
//! so a request with no dimensions at all is priced as a 10 cm cube.

use serde::{Deserialize, Serialize};

/// Default side length in centimetres for an unspecified dimension.
pub const DEFAULT_SIDE_CM: f64 = 10.0;

/// Parcel dimensions in centimetres.
///
/// # Examples
///
/// ```
/// use parcel_rates::domain::value_objects::dimensions::Dimensions;
///
/// let dims = Dimensions::from_optional(Some(24.5), Some(15.6), None);
/// assert_eq!(dims.length_mm(), 245.0);
/// assert_eq!(dims.height_cm(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
}

impl Dimensions {
    /// Creates dimensions from explicit side lengths in centimetres.
    #[must_use]
    pub const fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Creates dimensions from optional side lengths, defaulting each
    /// missing side to [`DEFAULT_SIDE_CM`].
    #[must_use]
    pub fn from_optional(length: Option<f64>, width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            length_cm: length.unwrap_or(DEFAULT_SIDE_CM),
            width_cm: width.unwrap_or(DEFAULT_SIDE_CM),
            height_cm: height.unwrap_or(DEFAULT_SIDE_CM),
        }
    }

    /// Length in centimetres.
    #[inline]
    #[must_use]
    pub const fn length_cm(&self) -> f64 {
        self.length_cm
    }

    /// Width in centimetres.
    #[inline]
    #[must_use]
    pub const fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Height in centimetres.
    #[inline]
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Length in millimetres.
    #[inline]
    #[must_use]
    pub fn length_mm(&self) -> f64 {
        self.length_cm * 10.0
    }

    /// Width in millimetres.
    #[inline]
    #[must_use]
    pub fn width_mm(&self) -> f64 {
        self.width_cm * 10.0
    }

    /// Height in millimetres.
    #[inline]
    #[must_use]
    pub fn height_mm(&self) -> f64 {
        self.height_cm * 10.0
    }
}

impl Default for Dimensions {
    /// A 10 cm cube.
    fn default() -> Self {
        Self::new(DEFAULT_SIDE_CM, DEFAULT_SIDE_CM, DEFAULT_SIDE_CM)
    }
}
