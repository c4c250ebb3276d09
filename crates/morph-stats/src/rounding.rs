//! The rounding rule shared by baseline capture and live comparison
//!
//! Values are scaled by `10^decimals` and rounded half to even. Comparisons
//! are done on the scaled, integer-valued result so no division error can
//! creep in between the two sides. Ties are decided on the binary value of the
//! scaled product: `1.005 * 100` is `100.49999...` and rounds down.

/// Largest supported number of decimals; beyond this f64 has no digits left.
pub const MAX_DECIMALS: u32 = 15;

/// `10^decimals` as f64
#[inline]
pub fn decimal_scale(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

/// Scale `value` by `10^decimals` and round half to even.
///
/// The result is an integer-valued f64. Two values agree to `decimals`
/// places iff their scaled roundings are equal.
#[inline]
pub fn scaled_round(value: f64, decimals: u32) -> f64 {
    (value * decimal_scale(decimals)).round_ties_even()
}

/// Round `value` to `decimals` places, half to even.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    scaled_round(value, decimals) / decimal_scale(decimals)
}

/// Whether `a` and `b` round to the same value at `decimals` places.
#[inline]
pub fn agrees_to(a: f64, b: f64, decimals: u32) -> bool {
    scaled_round(a, decimals) == scaled_round(b, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.5, 0, 2.0)]
    #[case(3.5, 0, 4.0)]
    #[case(-2.5, 0, -2.0)]
    #[case(0.125, 2, 0.12)]
    #[case(0.375, 2, 0.38)]
    #[case(12.3456, 2, 12.35)]
    #[case(-7.25, 1, -7.2)]
    fn test_round_half_even_ties(#[case] value: f64, #[case] decimals: u32, #[case] expected: f64) {
        assert_eq!(round_half_even(value, decimals), expected);
    }

    #[test]
    fn test_binary_representation_decides_near_ties() {
        // 1.005 is stored slightly below the decimal tie
        assert_eq!(round_half_even(1.005, 2), 1.0);
    }

    #[test]
    fn test_agrees_to() {
        assert!(agrees_to(50.0, 50.004, 2));
        assert!(!agrees_to(50.0, 50.006, 2));
        assert!(agrees_to(50.0, 50.4, 0));
        assert!(!agrees_to(50.0, 50.6, 0));
    }

    #[test]
    fn test_zero_is_stable() {
        assert!(agrees_to(0.0, -0.0, 3));
        assert_eq!(scaled_round(0.0, MAX_DECIMALS), 0.0);
    }
}
