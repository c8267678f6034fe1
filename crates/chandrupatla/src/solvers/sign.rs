//! Sign tests on function values.
//!
//! `f64::signum` maps `0.0` to `1.0` and `-0.0` to `-1.0`, so these helpers
//! compare against zero directly. Every comparison involving NaN is false.

/// Returns `true` if `x` and `y` are both strictly positive or both strictly
/// negative.
#[inline]
pub(crate) fn same_strict_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_sign() {
        assert!(same_strict_sign(1.0, 2.0));
        assert!(same_strict_sign(-1.0, -1e-300));
        assert!(!same_strict_sign(-1.0, 2.0));
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert!(!same_strict_sign(0.0, 1.0));
        assert!(!same_strict_sign(-0.0, -1.0));
        assert!(!same_strict_sign(0.0, 0.0));
    }

    #[test]
    fn test_nan_never_matches() {
        assert!(!same_strict_sign(f64::NAN, 1.0));
        assert!(!same_strict_sign(-1.0, f64::NAN));
    }
}
