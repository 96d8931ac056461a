// =============================================================================
// Signals Module
// =============================================================================
//
// Signal assembly and scoring for the squeeze scanner:
// - SqueezeSignal: the per-symbol input record (optional fields, absence
//   distinct from zero)
// - Composite threshold-ladder scoring => qualitative rating

pub mod squeeze;

pub use squeeze::{breakdown, score_squeeze_potential, ScoreBreakdown, SqueezeSignal};
