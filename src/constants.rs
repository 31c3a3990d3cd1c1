//! Crate-wide constants.
//!
//! Centralizes units, log filters and timing budgets so the input path and
//! its instrumentation agree on the same numbers.

// ============================================================================
// Formatting
// ============================================================================

/// Unit suffix used when a translation is rendered as a CSS-style transform
pub const TRANSLATE_UNIT: &str = "px";

// ============================================================================
// Logging
// ============================================================================

/// Filter applied when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "moveable=info";

/// Filter used by `logging::init_for_tests`
pub const TEST_LOG_FILTER: &str = "moveable=debug";

// ============================================================================
// Timing
// ============================================================================

/// One frame at 60 FPS
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Budget for handling a single pointer-move notification, callbacks included.
/// Moves arrive at input frequency; anything above this stalls the host.
pub const MOVE_BUDGET_MS: f64 = 1.0;
