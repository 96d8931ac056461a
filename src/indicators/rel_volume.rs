// =============================================================================
// Volume ratios — relative volume & days-to-cover
// =============================================================================
//
// Relative volume compares today's turnover to the historical baseline:
//   rel_vol = current_volume / average_volume
// Values above 1 mean unusually heavy trading, a precondition for most
// squeeze setups.
//
// Days-to-cover (the short interest ratio) estimates how many average
// sessions shorts would need to fully cover:
//   dtc = shares_short / average_volume

/// Ratio of current volume to the average baseline.
///
/// Returns `None` when the average is non-positive or either input is
/// non-finite.
pub fn relative_volume(current: f64, average: f64) -> Option<f64> {
    if !current.is_finite() || !average.is_finite() || average <= 0.0 {
        return None;
    }
    Some(current / average)
}

/// Days of average volume needed to cover the outstanding short position.
///
/// Same guards as [`relative_volume`].
pub fn days_to_cover(shares_short: f64, average_volume: f64) -> Option<f64> {
    if !shares_short.is_finite() || !average_volume.is_finite() || average_volume <= 0.0 {
        return None;
    }
    Some(shares_short / average_volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_volume_basic() {
        assert_eq!(relative_volume(3_000_000.0, 1_500_000.0), Some(2.0));
    }

    #[test]
    fn rel_volume_zero_average() {
        assert!(relative_volume(1_000_000.0, 0.0).is_none());
        assert!(relative_volume(1_000_000.0, -5.0).is_none());
    }

    #[test]
    fn rel_volume_non_finite() {
        assert!(relative_volume(f64::NAN, 1.0).is_none());
        assert!(relative_volume(1.0, f64::INFINITY).is_none());
    }

    #[test]
    fn days_to_cover_basic() {
        assert_eq!(days_to_cover(10_000_000.0, 2_000_000.0), Some(5.0));
    }

    #[test]
    fn days_to_cover_zero_volume() {
        assert!(days_to_cover(10_000_000.0, 0.0).is_none());
    }
}
