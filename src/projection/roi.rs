//! Return on investment between a baseline and an improved scenario

/// ROI in percent: `(plus - baseline) / baseline * 100`
///
/// Returns 0 when the baseline is zero or the ratio is not finite.
pub fn roi_pct(baseline: f64, plus: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    let roi = (plus - baseline) / baseline * 100.0;
    if roi.is_finite() {
        roi
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_roi() {
        assert_abs_diff_eq!(roi_pct(480_000.0, 576_000.0), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roi_pct(100.0, 100.0), 0.0);
        assert_abs_diff_eq!(roi_pct(100.0, 50.0), -50.0);
    }

    #[test]
    fn test_zero_baseline_is_guarded() {
        assert_eq!(roi_pct(0.0, 1_000.0), 0.0);
        assert_eq!(roi_pct(0.0, 0.0), 0.0);
        assert_eq!(roi_pct(f64::MIN_POSITIVE, f64::MAX), 0.0);
    }
}
