// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free calculations over upstream quote data.  Every public
// function that can run out of data returns `Option<T>` so callers are forced
// to handle insufficient-data and numerical-edge-case scenarios; the one
// exception is `rsi::calculate_rsi`, which preserves the quote feed's
// zero-sentinel contract and is documented accordingly.

pub mod change;
pub mod rel_volume;
pub mod rsi;
