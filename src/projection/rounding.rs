//! Commercial rounding (half away from zero) for volumes and amounts

/// Round to the nearest whole count, halves away from zero
pub fn round_volume(value: f64) -> i64 {
    value.round() as i64
}

/// Round to a whole count but keep the f64 representation
pub fn round_count(value: f64) -> f64 {
    value.round()
}

/// Round a currency amount to cents
///
/// Rounds `value * 100` half away from zero. Amounts such as 1.005 have no
/// exact binary form and sit just below the half, so they round down.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `value * pct / 100`
pub fn percent_of(value: f64, pct: f64) -> f64 {
    value * pct / 100.0
}

/// `part / whole * 100`, or 0 when `whole` is zero
pub fn share_pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(round_volume(2.5), 3);
        assert_eq!(round_volume(3.5), 4);
        assert_eq!(round_volume(-2.5), -3);
        assert_eq!(round_volume(2.4999), 2);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(65329.6000000001), 65329.6);
    }

    #[test]
    fn test_inexact_cent_halves_round_down() {
        assert_eq!(round_currency(1.005), 1.0);
        assert_eq!(round_currency(0.5 * 2.01), 1.0);
        assert_eq!(round_currency(-1.005), -1.0);
        // Exact binary halves still go away from zero
        assert_eq!(round_currency(0.375), 0.38);
        assert_eq!(round_currency(-0.375), -0.38);
    }

    #[test]
    fn test_share_of_zero_total() {
        assert_eq!(share_pct(10.0, 0.0), 0.0);
        assert_eq!(share_pct(25.0, 200.0), 12.5);
    }
}
