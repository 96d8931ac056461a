// =============================================================================
// Relative Strength Index (RSI) — simple-mean variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute the most recent `period` day-over-day deltas from the
//          close series.
// Step 2 — Partition deltas into gains (delta > 0) and losses (|delta| for
//          delta < 0).
// Step 3 — Average gains and losses with a plain arithmetic mean.  This is
//          the unsmoothed variant used by the quote feed, NOT Wilder's
//          exponential smoothing.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// INPUT ORDERING: closes are most-recent-first (reverse-chronological), as
// served by the quote feed.  Delta i is `closes[i] - closes[i + 1]` (newer
// minus older), so a rising market produces gains.  Passing a chronological
// series silently inverts gains and losses — reverse it first.
// =============================================================================

/// Compute a single RSI value from the most recent `period` deltas of a
/// most-recent-first close series.
///
/// Returns `None` when `period == 0` or fewer than `period + 1` closes are
/// available (`period` deltas require `period + 1` prices).  Closes beyond
/// the first `period + 1` are ignored.
///
/// # Edge cases
/// - Average loss of zero (no down days) => 100.0, which also covers a
///   perfectly flat series.  This avoids division by zero.
/// - NaN closes are not validated and propagate into the result; the feed
///   parser is responsible for rejecting them.
pub fn try_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    // --- Most recent `period` deltas, newer minus older --------------------
    let (sum_gain, sum_loss) = closes
        .windows(2)
        .take(period)
        .map(|w| w[0] - w[1])
        .fold((0.0_f64, 0.0_f64), |(g, l), d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    let avg_gain = sum_gain / period_f;
    let avg_loss = sum_loss / period_f;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// The quote feed's RSI contract: identical to [`try_rsi`], except that
/// insufficient data yields the degenerate sentinel `0.0` instead of `None`.
///
/// `0.0` is therefore ambiguous — it means either "maximally oversold" or
/// "not enough closes".  Callers that need the distinction should check the
/// input length themselves or use [`try_rsi`]; the scan pipeline does.
pub fn calculate_rsi(closes: &[f64], period: usize) -> f64 {
    try_rsi(closes, period).unwrap_or(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Build a feed-ordered (most-recent-first) series from chronological
    /// closes.
    fn feed_order(chronological: &[f64]) -> Vec<f64> {
        chronological.iter().rev().copied().collect()
    }

    // ---- insufficient data ------------------------------------------------

    #[test]
    fn rsi_empty_input() {
        assert!(try_rsi(&[], 14).is_none());
        assert_eq!(calculate_rsi(&[], 14), 0.0);
    }

    #[test]
    fn rsi_period_zero() {
        assert!(try_rsi(&[1.0, 2.0, 3.0], 0).is_none());
    }

    #[test]
    fn rsi_one_close_short() {
        // 14 deltas need 15 closes; 14 closes are not enough.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(try_rsi(&closes, 14).is_none());
        assert_eq!(calculate_rsi(&closes, 14), 0.0);
    }

    // ---- directional extremes ---------------------------------------------

    #[test]
    fn rsi_rising_market() {
        // Prices rise every session => all gains => RSI = 100.
        let chronological: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        let rsi = try_rsi(&feed_order(&chronological), 14).unwrap();
        assert!((rsi - 100.0).abs() < 1e-10, "expected 100.0, got {rsi}");
    }

    #[test]
    fn rsi_falling_market() {
        // Prices fall every session => no gains => RS = 0 => RSI = 0.
        let chronological: Vec<f64> = (1..=15).rev().map(|x| x as f64).collect();
        let rsi = try_rsi(&feed_order(&chronological), 14).unwrap();
        assert!(rsi.abs() < 1e-10, "expected 0.0, got {rsi}");
    }

    #[test]
    fn rsi_flat_market() {
        // No movement => avg loss is 0 => the division guard yields 100.
        let closes = vec![100.0; 20];
        let rsi = try_rsi(&closes, 14).unwrap();
        assert!((rsi - 100.0).abs() < 1e-10, "expected 100.0, got {rsi}");
    }

    // ---- balanced and bounded ---------------------------------------------

    #[test]
    fn rsi_balanced_moves() {
        // Alternating +1 / -1 deltas: avg gain == avg loss => RS = 1 => 50.
        let mut closes = vec![10.0];
        for i in 0..14 {
            let delta = if i % 2 == 0 { 1.0 } else { -1.0 };
            let prev = *closes.last().unwrap();
            closes.push(prev - delta); // feed order: older follows newer
        }
        let rsi = try_rsi(&closes, 14).unwrap();
        assert!((rsi - 50.0).abs() < 1e-10, "expected 50.0, got {rsi}");
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            43.13, 42.66, 43.42, 44.57, 44.22, 44.18, 46.03, 45.89, 46.08, 45.84,
            45.42, 45.10, 44.83, 44.33, 43.61, 44.15, 44.09, 44.34,
        ];
        let rsi = try_rsi(&closes, 14).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "RSI {rsi} out of range");
    }

    #[test]
    fn rsi_ignores_stale_history() {
        // Only the most recent 15 closes matter; older tail is ignored.
        let chronological: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        let mut with_tail = feed_order(&chronological);
        let base = try_rsi(&with_tail, 14).unwrap();
        with_tail.extend([500.0, 1.0, 250.0, 3.0]);
        let extended = try_rsi(&with_tail, 14).unwrap();
        assert_eq!(base, extended);
    }
}
