//! Core geometry and event types.
//!
//! All positions are `f64` in page space unless noted otherwise. A
//! [`Translate`] is the offset applied to an element relative to its
//! untransformed position.

use crate::constants::TRANSLATE_UNIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Vectors
// ============================================================================

/// A 2D vector: a pointer position, a delta, or a translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Offset currently applied to an element.
pub type Translate = Vec2;

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Element geometry
// ============================================================================

/// Position and size of an element as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Absolute edges of an element in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Edges of `layout` once shifted by `offset`.
    pub fn from_box(layout: ElementBox, offset: Vec2) -> Self {
        let left = layout.left + offset.x;
        let top = layout.top + offset.y;
        Self::new(left, top, left + layout.width, top + layout.height)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

// ============================================================================
// Transform formatting
// ============================================================================

/// A translation rendered as `translate(<x>px,<y>px)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform(pub Translate);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}{unit},{}{unit})",
            self.0.x,
            self.0.y,
            unit = TRANSLATE_UNIT
        )
    }
}

// ============================================================================
// Pointer events
// ============================================================================

/// A pointer notification delivered by the host event system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the document
    pub page: Vec2,
    /// Position relative to the viewport
    pub client: Vec2,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(page: Vec2, client: Vec2) -> Self {
        Self {
            page,
            client,
            default_prevented: false,
        }
    }

    /// Event for an unscrolled document, where page and client coincide.
    pub fn at(x: f64, y: f64) -> Self {
        let pos = Vec2::new(x, y);
        Self::new(pos, pos)
    }

    /// Suppress the host's default handling (e.g. text selection).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
