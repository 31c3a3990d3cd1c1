//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link time down.
//!
//! Structure:
//! - integration: Full gestures and requests through the in-memory host
//! - unit: Single-component tests against the public API

mod integration;
