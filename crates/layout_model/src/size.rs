//! Size specification for one dimension of a layout node

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// The size of one dimension (width or height) of a layout node.
///
/// Fractional variants are resolved by the layout engine against the
/// containing group; fixed and estimated values are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// Zero-sized dimension (used by decoration backgrounds)
    Zero,
    /// An exact point value
    Fixed(f64),
    /// An estimated point value, re-measured by the engine once content renders
    Estimated(f64),
    /// A fraction of the containing group's width
    FractionalWidth(f64),
    /// A fraction of the containing group's height
    FractionalHeight(f64),
}

impl SizeSpec {
    /// Rescale for a slot that is one of `count` equal parts of the container.
    ///
    /// Fixed and estimated values are divided by `count`; fractional values
    /// become `1 / count` regardless of their previous fraction. `Zero`
    /// collapses to `Fixed(0.0)`.
    pub fn resize_by_count(self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(LayoutError::InvalidArgument(
                "resize_by_count requires a count of at least 1".to_string(),
            ));
        }

        let divisor = count as f64;
        Ok(match self {
            SizeSpec::Zero => SizeSpec::Fixed(0.0),
            SizeSpec::Fixed(value) => SizeSpec::Fixed(value / divisor),
            SizeSpec::Estimated(value) => SizeSpec::Estimated(value / divisor),
            SizeSpec::FractionalWidth(_) => SizeSpec::FractionalWidth(1.0 / divisor),
            SizeSpec::FractionalHeight(_) => SizeSpec::FractionalHeight(1.0 / divisor),
        })
    }

    /// Rescale by a weight ratio, used for unequal nested-group partitions.
    ///
    /// Fixed and estimated values are multiplied by `ratio`; fractional
    /// values are replaced by `ratio`. `Zero` collapses to `Fixed(0.0)`.
    pub fn resize_by_ratio(self, ratio: f64) -> Self {
        match self {
            SizeSpec::Zero => SizeSpec::Fixed(0.0),
            SizeSpec::Fixed(value) => SizeSpec::Fixed(value * ratio),
            SizeSpec::Estimated(value) => SizeSpec::Estimated(value * ratio),
            SizeSpec::FractionalWidth(_) => SizeSpec::FractionalWidth(ratio),
            SizeSpec::FractionalHeight(_) => SizeSpec::FractionalHeight(ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resize_by_count_fixed() {
        let resized = SizeSpec::Fixed(120.0).resize_by_count(3).unwrap();
        assert_eq!(resized, SizeSpec::Fixed(40.0));
    }

    #[test]
    fn test_resize_by_count_estimated() {
        let resized = SizeSpec::Estimated(50.0).resize_by_count(2).unwrap();
        assert_eq!(resized, SizeSpec::Estimated(25.0));
    }

    #[test]
    fn test_resize_by_count_fractional_ignores_previous_fraction() {
        let resized = SizeSpec::FractionalWidth(0.7).resize_by_count(4).unwrap();
        assert_eq!(resized, SizeSpec::FractionalWidth(0.25));

        let resized = SizeSpec::FractionalHeight(0.3).resize_by_count(4).unwrap();
        assert_eq!(resized, SizeSpec::FractionalHeight(0.25));
    }

    #[test]
    fn test_resize_by_count_zero_variant() {
        let resized = SizeSpec::Zero.resize_by_count(5).unwrap();
        assert_eq!(resized, SizeSpec::Fixed(0.0));
    }

    #[test]
    fn test_resize_by_count_rejects_zero() {
        let result = SizeSpec::Fixed(10.0).resize_by_count(0);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_resize_by_ratio() {
        assert_eq!(
            SizeSpec::Fixed(100.0).resize_by_ratio(0.25),
            SizeSpec::Fixed(25.0)
        );
        assert_eq!(
            SizeSpec::Estimated(40.0).resize_by_ratio(0.5),
            SizeSpec::Estimated(20.0)
        );
        assert_eq!(
            SizeSpec::FractionalHeight(1.0).resize_by_ratio(0.33),
            SizeSpec::FractionalHeight(0.33)
        );
        assert_eq!(SizeSpec::Zero.resize_by_ratio(0.5), SizeSpec::Fixed(0.0));
    }

    proptest! {
        #[test]
        fn prop_count_then_inverse_ratio_round_trips(
            value in -1.0e6f64..1.0e6,
            count in 1usize..256,
        ) {
            let divided = SizeSpec::Fixed(value).resize_by_count(count).unwrap();
            let restored = divided.resize_by_ratio(count as f64);

            if let SizeSpec::Fixed(restored_value) = restored {
                prop_assert!((restored_value - value).abs() <= value.abs() * 1e-12 + 1e-12);
            } else {
                prop_assert!(false, "variant family changed: {:?}", restored);
            }
        }

        #[test]
        fn prop_fractional_count_is_reciprocal(
            fraction in 0.0f64..1.0,
            count in 1usize..256,
        ) {
            let resized = SizeSpec::FractionalWidth(fraction).resize_by_count(count).unwrap();
            prop_assert_eq!(resized, SizeSpec::FractionalWidth(1.0 / count as f64));
        }
    }
}
