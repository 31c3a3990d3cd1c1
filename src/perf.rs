//! Timing instrumentation for the pointer path.
//!
//! Pointer handling runs on the host's input thread, so slow callbacks show up
//! as input lag. This module times press, move, release and request handling.
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! moveable = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use moveable::profile_scope;
//!
//! fn on_pointer_move() {
//!     profile_scope!("on_pointer_move");
//!     // ... work ...
//! }
//! ```

use crate::constants::MOVE_BUDGET_MS;
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_pointer($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports on drop when it exceeds its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the per-move budget as threshold.
    pub fn for_pointer(name: &'static str) -> Self {
        Self::new(name, MOVE_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Whether the timer has already run past its threshold
    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.3}", elapsed_ms),
            threshold_ms = format!("{:.3}", self.threshold_ms),
            "Slow pointer handling"
        );
    }
}

/// Run `f` and log if it took longer than `threshold_ms`.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &'static str, threshold_ms: f64, f: F) -> T {
    let _timer = ScopedTimer::new(name, threshold_ms);
    f()
}
