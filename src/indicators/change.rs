// =============================================================================
// Price change — day-over-day move & distance from the 52-week high
// =============================================================================

/// Percent change between the two most recent closes of a most-recent-first
/// series:
///   change = ((closes[0] - closes[1]) / closes[1]) * 100
///
/// Returns `None` with fewer than two closes or a non-positive prior close.
pub fn one_day_change(closes: &[f64]) -> Option<f64> {
    let (latest, prev) = match closes {
        [latest, prev, ..] => (*latest, *prev),
        _ => return None,
    };
    if prev <= 0.0 {
        return None;
    }
    Some(((latest - prev) / prev) * 100.0)
}

/// Percent below the 52-week high, as a positive number for prices under the
/// high. Returns `None` for a non-positive high.
pub fn distance_from_high(last: f64, high_52w: f64) -> Option<f64> {
    if high_52w <= 0.0 {
        return None;
    }
    Some(((high_52w - last) / high_52w) * 100.0)
}
