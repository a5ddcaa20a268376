// extensions/easing.rs
//
// Pure easing and progress helpers.
// No dependencies on the animator or the surface.
//
// These are total functions: nothing here clamps its input. Callers that need
// a [0, 1] domain clamp first; out-of-range input extrapolates the curve.

/// Clamp `n` into `[lo, hi]`.
///
/// Evaluates as `max(lo, min(hi, n))`, so an inverted range returns `lo`
/// instead of panicking like `f32::clamp`. NaN input yields `hi`.
#[inline]
pub fn clamp(n: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(n))
}

/// Cubic slow start and end.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic slow end.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn clamp_inverted_range_returns_lo() {
        assert_eq!(clamp(5.0, 3.0, 1.0), 3.0);
    }

    #[test]
    fn clamp_nan_collapses_to_hi() {
        // f32::min drops the NaN operand
        assert_eq!(clamp(f32::NAN, 0.0, 1.0), 1.0);
    }

    #[test]
    fn cubic_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_out_faster_start() {
        let mid = ease_out_cubic(0.5);
        assert!(mid > 0.5, "ease_out_cubic at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn out_of_domain_extrapolates() {
        // 1 - (1 - 2)^3 = 2
        assert_eq!(ease_out_cubic(2.0), 2.0);
        // 4 * (-1)^3 = -4
        assert_eq!(ease_in_out_cubic(-1.0), -4.0);
    }

}
