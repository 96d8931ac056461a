// =============================================================================
// Scan Report — persistence & summary logging
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::scanner::SqueezeAnalysis;

/// The ranked output of one scan run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    /// Snapshots examined, before filtering and truncation.
    pub scanned: usize,
    pub candidates: Vec<SqueezeAnalysis>,
}

impl ScanReport {
    pub fn new(scanned: usize, candidates: Vec<SqueezeAnalysis>) -> Self {
        Self {
            generated_at: Utc::now(),
            scanned,
            candidates,
        }
    }

    /// Persist the report to `path` using an atomic write (write to `.tmp`,
    /// then rename).
    ///
    /// This prevents a half-written report if the process dies mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise scan report")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp report to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp report to {}", path.display()))?;

        info!(path = %path.display(), candidates = self.candidates.len(), "scan report saved");
        Ok(())
    }

    /// Emit one summary line per candidate.
    pub fn log_summary(&self) {
        for analysis in &self.candidates {
            match analysis.score {
                Some(score) => info!(
                    symbol = %analysis.symbol,
                    rating = %analysis.rating,
                    total = score.total,
                    short_interest = score.short_interest,
                    volume = score.volume,
                    rsi = score.rsi,
                    price_change = score.price_change,
                    "candidate"
                ),
                None => info!(
                    symbol = %analysis.symbol,
                    rating = %analysis.rating,
                    "candidate"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_config::ScanConfig;
    use crate::scanner;
    use crate::types::QuoteSnapshot;

    fn sample_report() -> ScanReport {
        let snapshot = QuoteSnapshot {
            symbol: "AMC".to_string(),
            closes: (0..20).map(|i| 100.0 - i as f64).collect(),
            current_volume: Some(4_000_000.0),
            average_volume: Some(2_000_000.0),
            short_percent_float: Some(22.0),
            shares_short: Some(6_000_000.0),
            week_52_high: Some(150.0),
            as_of: None,
        };
        let candidates = scanner::run_scan(&[snapshot], &ScanConfig::default());
        ScanReport::new(1, candidates)
    }

    #[test]
    fn report_round_trips_through_save() {
        let dir = std::env::temp_dir().join("squeeze-radar-report-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");

        let report = sample_report();
        report.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["scanned"], 1);
        assert_eq!(value["candidates"][0]["symbol"], "AMC");
        // No tmp file left behind after the rename.
        assert!(!path.with_extension("json.tmp").exists());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn report_serialises_rating_strings() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"rating\""));
        // Rising market pegs RSI at 100; 3 + 2 (volume) + 2 (short) = 7.
        assert!(json.contains("\"High\""));
    }
}
