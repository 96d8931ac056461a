// =============================================================================
// Scan Configuration — JSON-backed settings with serde defaults
// =============================================================================
//
// Every tunable parameter of the scanner lives here.  All fields carry
// `#[serde(default)]` so that adding new fields never breaks loading an older
// config file; a missing file falls back to defaults with a warning at the
// call site.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_rsi_period() -> usize {
    14
}

fn default_top_n() -> usize {
    0
}

fn default_true() -> bool {
    true
}

fn default_report_path() -> String {
    "squeeze_report.json".to_string()
}

// =============================================================================
// ScanConfig
// =============================================================================

/// Top-level configuration for a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// RSI look-back period in sessions.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Keep only the strongest N candidates in the report; 0 keeps all.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Whether symbols rated "Insufficient data" appear in the report.
    #[serde(default = "default_true")]
    pub include_insufficient: bool,

    /// Where the JSON report is written.
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            top_n: default_top_n(),
            include_insufficient: true,
            report_path: default_report_path(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scan config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse scan config from {}", path.display()))?;

        info!(
            path = %path.display(),
            rsi_period = config.rsi_period,
            top_n = config.top_n,
            "scan config loaded"
        );

        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.rsi_period, 14);
        assert_eq!(cfg.top_n, 0);
        assert!(cfg.include_insufficient);
        assert_eq!(cfg.report_path, "squeeze_report.json");
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.rsi_period, 14);
        assert!(cfg.include_insufficient);
    }

    #[test]
    fn deserialise_partial_json_keeps_other_defaults() {
        let cfg: ScanConfig = serde_json::from_str(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.rsi_period, 14);
        assert_eq!(cfg.report_path, "squeeze_report.json");
    }
}
