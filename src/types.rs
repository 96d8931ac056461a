// =============================================================================
// Shared types used across the squeeze-radar scanner
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One symbol's worth of upstream quote data, as delivered by the quote feed.
///
/// Closing prices are ordered most-recent-first (reverse-chronological), the
/// way the feed serves them. Every market field is optional: the feed
/// routinely omits short-interest and volume figures for thinly covered
/// symbols, and absence must stay distinguishable from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: String,
    /// Closing prices, most recent first.
    #[serde(default)]
    pub closes: Vec<f64>,
    #[serde(default)]
    pub current_volume: Option<f64>,
    #[serde(default)]
    pub average_volume: Option<f64>,
    /// Short interest as a percentage of the public float.
    #[serde(default)]
    pub short_percent_float: Option<f64>,
    #[serde(default)]
    pub shares_short: Option<f64>,
    #[serde(default)]
    pub week_52_high: Option<f64>,
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

/// Qualitative squeeze-potential rating, ordered lowest to highest.
///
/// `InsufficientData` is the sentinel emitted when required inputs are
/// missing; it sorts below every scored rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SqueezeRating {
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for SqueezeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData => write!(f, "Insufficient data"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very High"),
        }
    }
}
