//! # Mass Unit Conversion
//!
//! Pure conversion functions between grams, kilograms and pounds.
//!
//! Inbound requests carry weight as a bare number plus a unit string
//! (`g`, `kg` or `lb`). Both converters are total: an unrecognized unit
//! string is treated as already being in the converter's target unit, so
//! no error path exists.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::units::{to_grams, to_kilograms};
//!
//! assert_eq!(to_kilograms(1500.0, "g"), 1.5);
//! assert_eq!(to_grams(1.5, "kg"), 1500.0);
//! assert_eq!(to_kilograms(2.0, "lb"), 0.907184);
//! ```

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Grams per pound.
pub const G_PER_LB: f64 = 453.592;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1000.0;

/// Converts a mass to kilograms.
///
/// Recognized units are `g`, `kg` and `lb` (case-insensitive). Any other
/// unit string is treated as kilograms and the value passes through
/// unchanged.
#[must_use]
pub fn to_kilograms(value: f64, unit: &str) -> f64 {
    match unit.trim().to_ascii_lowercase().as_str() {
        "g" => value / G_PER_KG,
        "lb" => value * KG_PER_LB,
        _ => value,
    }
}

/// Converts a mass to grams.
///
/// Recognized units are `g`, `kg` and `lb` (case-insensitive). Any other
/// unit string is treated as grams and the value passes through unchanged.
#[must_use]
pub fn to_grams(value: f64, unit: &str) -> f64 {
    match unit.trim().to_ascii_lowercase().as_str() {
        "kg" => value * G_PER_KG,
        "lb" => value * G_PER_LB,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn grams_to_kilograms() {
        assert!((to_kilograms(1500.0, "g") - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn pounds_to_kilograms() {
        assert!((to_kilograms(1.0, "lb") - 0.453592).abs() < TOLERANCE);
    }

    #[test]
    fn kilograms_pass_through() {
        assert!((to_kilograms(2.5, "kg") - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn kilograms_to_grams() {
        assert!((to_grams(1.5, "kg") - 1500.0).abs() < TOLERANCE);
    }

    #[test]
    fn pounds_to_grams() {
        assert!((to_grams(1.0, "lb") - 453.592).abs() < TOLERANCE);
    }

    #[test]
    fn grams_pass_through() {
        assert!((to_grams(30.0, "g") - 30.0).abs() < TOLERANCE);
    }

    #[test]
    fn unit_is_case_insensitive() {
        assert!((to_kilograms(1000.0, "G") - 1.0).abs() < TOLERANCE);
        assert!((to_grams(1.0, " KG ") - 1000.0).abs() < TOLERANCE);
    }

    #[test]
    fn unrecognized_unit_is_identity() {
        assert!((to_kilograms(7.0, "stone") - 7.0).abs() < TOLERANCE);
        assert!((to_grams(7.0, "oz") - 7.0).abs() < TOLERANCE);
    }

    proptest! {
        #[test]
        fn gram_kilogram_round_trip(value in 0.0f64..1.0e6) {
            let kg = to_kilograms(value, "g");
            let back = to_grams(kg, "kg");
            prop_assert!((back - value).abs() < 1e-6 * value.max(1.0));
        }

        #[test]
        fn pound_conversions_agree(value in 0.0f64..1.0e4) {
            let kg = to_kilograms(value, "lb");
            let g = to_grams(value, "lb");
            prop_assert!((g - kg * 1000.0).abs() < 1e-6 * g.max(1.0));
        }
    }
}
