//! Integration tests for moveable.
//!
//! These tests drive the controller through the in-memory event source,
//! so every notification goes through subscription routing.

mod gesture_tests;
