// =============================================================================
// Squeeze-Potential Scorer — composite threshold ladders
// =============================================================================
//
// Four independent signals each contribute an integer subscore on a strict
// (`>`, never `>=`) threshold ladder; the composite sum maps to a qualitative
// rating:
//
//   short % of float   >30 => 3   >20 => 2   >10 => 1
//   relative volume    >2  => 3   >1.5 => 2  >1.2 => 1
//   RSI                >70 => 3   >60 => 2   >50 => 1
//   price change %     >5  => +1  (only when present)
//
//   total >= 8 => Very High,  >= 6 => High,  >= 4 => Medium,  else Low
//
// Short % of float, relative volume, and RSI are required: if any is absent
// the scorer short-circuits to "Insufficient data".  Price change is scored
// but NOT required — a signal missing only the price change still gets a
// rating.  That asymmetry matches the upstream heuristic and is intentional.

use serde::{Deserialize, Serialize};

use crate::types::SqueezeRating;

/// Per-symbol signal inputs to the squeeze scorer.
///
/// Every field is optional; `None` means the upstream provider had no data,
/// which is not the same as a value of zero.  The record is built once per
/// analysis and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqueezeSignal {
    /// Short interest as a percentage of the public float.
    #[serde(default)]
    pub short_percent_float: Option<f64>,
    /// Current volume over the average baseline.
    #[serde(default)]
    pub relative_volume: Option<f64>,
    /// 14-period RSI in [0, 100].
    #[serde(default)]
    pub rsi: Option<f64>,
    /// Day-over-day close change in percent.
    #[serde(default)]
    pub price_change_percent: Option<f64>,
    /// Sessions of average volume needed for shorts to cover.  Reported,
    /// not scored.
    #[serde(default)]
    pub days_to_cover: Option<f64>,
    /// Percent below the 52-week high.  Reported, not scored.
    #[serde(default)]
    pub distance_from_high: Option<f64>,
}

/// The contribution of each ladder to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub short_interest: u8,
    pub volume: u8,
    pub rsi: u8,
    pub price_change: u8,
    /// Sum of the four subscores; at most 10.
    pub total: u8,
}

// =============================================================================
// Threshold ladders
// =============================================================================

fn short_interest_points(pct: f64) -> u8 {
    if pct > 30.0 {
        3
    } else if pct > 20.0 {
        2
    } else if pct > 10.0 {
        1
    } else {
        0
    }
}

fn volume_points(rel_vol: f64) -> u8 {
    if rel_vol > 2.0 {
        3
    } else if rel_vol > 1.5 {
        2
    } else if rel_vol > 1.2 {
        1
    } else {
        0
    }
}

fn rsi_points(rsi: f64) -> u8 {
    if rsi > 70.0 {
        3
    } else if rsi > 60.0 {
        2
    } else if rsi > 50.0 {
        1
    } else {
        0
    }
}

fn price_change_points(change: Option<f64>) -> u8 {
    match change {
        Some(pct) if pct > 5.0 => 1,
        _ => 0,
    }
}

// =============================================================================
// Public scoring surface
// =============================================================================

/// Score each ladder and total them up.
///
/// Returns `None` when any required input (`short_percent_float`,
/// `relative_volume`, `rsi`) is absent.  `price_change_percent` contributes
/// when present but its absence does not block scoring.
pub fn breakdown(signal: &SqueezeSignal) -> Option<ScoreBreakdown> {
    let short_pct = signal.short_percent_float?;
    let rel_vol = signal.relative_volume?;
    let rsi_value = signal.rsi?;

    let short_interest = short_interest_points(short_pct);
    let volume = volume_points(rel_vol);
    let rsi = rsi_points(rsi_value);
    let price_change = price_change_points(signal.price_change_percent);

    Some(ScoreBreakdown {
        short_interest,
        volume,
        rsi,
        price_change,
        total: short_interest + volume + rsi + price_change,
    })
}

/// Map a signal to its qualitative squeeze rating.
///
/// Always returns one of the five defined ratings, with
/// [`SqueezeRating::InsufficientData`] standing in when [`breakdown`] cannot
/// score the signal.
pub fn score_squeeze_potential(signal: &SqueezeSignal) -> SqueezeRating {
    match breakdown(signal) {
        Some(scores) => rating_for(scores.total),
        None => SqueezeRating::InsufficientData,
    }
}

fn rating_for(total: u8) -> SqueezeRating {
    if total >= 8 {
        SqueezeRating::VeryHigh
    } else if total >= 6 {
        SqueezeRating::High
    } else if total >= 4 {
        SqueezeRating::Medium
    } else {
        SqueezeRating::Low
    }
}
