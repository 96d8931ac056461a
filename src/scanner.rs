// =============================================================================
// Scan pipeline — snapshot => signal => rating, then ranking
// =============================================================================
//
// `analyze_snapshot` derives every SqueezeSignal field from one symbol's raw
// quote data; `run_scan` analyzes the whole snapshot file and produces the
// ranked candidate list.  Ranking is by composite score descending; unscored
// rows ("Insufficient data") sort after every scored row and can be dropped
// entirely via config.

use serde::Serialize;
use tracing::debug;

use crate::indicators::{change, rel_volume, rsi};
use crate::runtime_config::ScanConfig;
use crate::signals::{self, ScoreBreakdown, SqueezeSignal};
use crate::types::{QuoteSnapshot, SqueezeRating};

/// Full analysis output for a single symbol.
#[derive(Debug, Clone, Serialize)]
pub struct SqueezeAnalysis {
    pub symbol: String,
    pub signal: SqueezeSignal,
    /// Absent when required signal inputs were missing.
    pub score: Option<ScoreBreakdown>,
    pub rating: SqueezeRating,
}

impl SqueezeAnalysis {
    /// Composite total, with unscored rows treated as below every scored row.
    fn rank_key(&self) -> i16 {
        self.score.map(|s| i16::from(s.total)).unwrap_or(-1)
    }
}

/// Derive the signal record for one snapshot and score it.
pub fn analyze_snapshot(snapshot: &QuoteSnapshot, config: &ScanConfig) -> SqueezeAnalysis {
    let rsi = rsi::try_rsi(&snapshot.closes, config.rsi_period);
    if rsi.is_none() {
        debug!(
            symbol = %snapshot.symbol,
            closes = snapshot.closes.len(),
            need = config.rsi_period + 1,
            "not enough closes for RSI"
        );
    }

    let relative_volume = match (snapshot.current_volume, snapshot.average_volume) {
        (Some(cur), Some(avg)) => rel_volume::relative_volume(cur, avg),
        _ => None,
    };

    let days_to_cover = match (snapshot.shares_short, snapshot.average_volume) {
        (Some(short), Some(avg)) => rel_volume::days_to_cover(short, avg),
        _ => None,
    };

    let distance_from_high = match (snapshot.closes.first(), snapshot.week_52_high) {
        (Some(&last), Some(high)) => change::distance_from_high(last, high),
        _ => None,
    };

    let signal = SqueezeSignal {
        short_percent_float: snapshot.short_percent_float,
        relative_volume,
        rsi,
        price_change_percent: change::one_day_change(&snapshot.closes),
        days_to_cover,
        distance_from_high,
    };

    let score = signals::breakdown(&signal);
    let rating = signals::score_squeeze_potential(&signal);

    SqueezeAnalysis {
        symbol: snapshot.symbol.clone(),
        signal,
        score,
        rating,
    }
}

/// Analyze every snapshot and rank the results.
///
/// Sort order: composite score descending, then symbol ascending for stable
/// output.  `top_n == 0` means unlimited.
pub fn run_scan(snapshots: &[QuoteSnapshot], config: &ScanConfig) -> Vec<SqueezeAnalysis> {
    let mut candidates: Vec<SqueezeAnalysis> = snapshots
        .iter()
        .map(|snapshot| analyze_snapshot(snapshot, config))
        .filter(|analysis| {
            config.include_insufficient || analysis.rating != SqueezeRating::InsufficientData
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.rank_key()
            .cmp(&a.rank_key())
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    if config.top_n > 0 {
        candidates.truncate(config.top_n);
    }
    candidates
}
