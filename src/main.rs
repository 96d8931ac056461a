// =============================================================================
// Squeeze Radar — Main Entry Point
// =============================================================================
//
// One-shot scanner: load config, read the upstream quote snapshots from disk,
// score every symbol, and write the ranked report.  All network retrieval
// happens upstream; this process never opens a socket.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod indicators;
mod report;
mod runtime_config;
mod scanner;
mod signals;
mod types;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::ScanReport;
use crate::runtime_config::ScanConfig;
use crate::types::QuoteSnapshot;

fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        Squeeze Radar — Short-Squeeze Scanner            ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let config = ScanConfig::load("scan_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ScanConfig::default()
    });

    // Snapshot file: first CLI argument, then env, then the default name.
    let input_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SQUEEZE_SNAPSHOTS").ok())
        .unwrap_or_else(|| "snapshots.json".to_string());

    // ── 2. Load upstream snapshots ───────────────────────────────────────
    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("failed to read snapshots from {input_path}"))?;
    let snapshots: Vec<QuoteSnapshot> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshots from {input_path}"))?;

    info!(path = %input_path, count = snapshots.len(), "quote snapshots loaded");

    // ── 3. Scan & rank ───────────────────────────────────────────────────
    let candidates = scanner::run_scan(&snapshots, &config);
    info!(
        scanned = snapshots.len(),
        reported = candidates.len(),
        "scan complete"
    );

    // ── 4. Report ────────────────────────────────────────────────────────
    let report = ScanReport::new(snapshots.len(), candidates);
    report.log_summary();
    report.save(&config.report_path)?;

    Ok(())
}
