//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go. Both initializers are idempotent.

use crate::constants::{DEFAULT_LOG_FILTER, TEST_LOG_FILTER};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<bool> = OnceCell::new();

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Returns false if another global subscriber was already installed.
pub fn init() -> bool {
    *INIT.get_or_init(|| install(DEFAULT_LOG_FILTER, false))
}

/// Install a subscriber that writes through the test harness capture.
pub fn init_for_tests() -> bool {
    *INIT.get_or_init(|| install(TEST_LOG_FILTER, true))
}

fn install(default_filter: &str, test_writer: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if test_writer {
        builder.with_test_writer().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
