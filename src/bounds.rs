//! Movement limits and the policy applied when a move would cross them.
//!
//! ## Violation scalars
//!
//! For a pointer delta `d` and the element's edges at press time `r`:
//!
//! ```text
//! left   = bounds.left - (d.x + r.left)
//! top    = bounds.top  - (d.y + r.top)
//! right  = d.x + r.right  - bounds.right
//! bottom = d.y + r.bottom - bounds.bottom
//! ```
//!
//! A non-negative scalar means the element would sit on or past that limit.
//! Sides are checked left, top, right, bottom; the first hit wins.

use crate::options::BoundsConfig;
use crate::types::{ElementRect, Translate, Vec2};
use serde::Serialize;

/// One side of the bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Tie-break order for simultaneous violations.
    pub const ORDER: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];
}

/// Fully resolved limits. Every side holds a definite value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        left: f64::NEG_INFINITY,
        top: f64::NEG_INFINITY,
        right: f64::INFINITY,
        bottom: f64::INFINITY,
    };

    /// Fill unspecified sides with an infinity that can never trigger.
    ///
    /// Values are taken as-is; NaN or inverted limits are not rejected.
    pub fn resolve(config: Option<&BoundsConfig>) -> Self {
        let config = config.copied().unwrap_or_default();
        Self {
            left: config.left.unwrap_or(f64::NEG_INFINITY),
            top: config.top.unwrap_or(f64::NEG_INFINITY),
            right: config.right.unwrap_or(f64::INFINITY),
            bottom: config.bottom.unwrap_or(f64::INFINITY),
        }
    }

    /// Violation scalar for one side.
    pub fn violation(&self, side: Side, start: &ElementRect, delta: Vec2) -> f64 {
        match side {
            Side::Left => self.left - (delta.x + start.left),
            Side::Top => self.top - (delta.y + start.top),
            Side::Right => delta.x + start.right - self.right,
            Side::Bottom => delta.y + start.bottom - self.bottom,
        }
    }

    /// Violation scalars for every side at once.
    pub fn overshoot(&self, start: &ElementRect, delta: Vec2) -> Overshoot {
        Overshoot {
            left: self.violation(Side::Left, start, delta),
            top: self.violation(Side::Top, start, delta),
            right: self.violation(Side::Right, start, delta),
            bottom: self.violation(Side::Bottom, start, delta),
        }
    }

    /// First violated side in [`Side::ORDER`], if any.
    pub fn first_violation(&self, start: &ElementRect, delta: Vec2) -> Option<Violation> {
        self.overshoot(start, delta).first_violation()
    }
}

/// A side that a candidate translation would reach or cross.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Violation {
    pub side: Side,
    /// How far past the limit the element would be (zero when exactly on it)
    pub overshoot: f64,
}

/// Violation scalars for all four sides of one candidate translation.
///
/// Negative (or NaN) values mean the side is within its limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overshoot {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Overshoot {
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    pub fn first_violation(&self) -> Option<Violation> {
        Side::ORDER.into_iter().find_map(|side| {
            let overshoot = self.get(side);
            (overshoot >= 0.0).then_some(Violation { side, overshoot })
        })
    }

    /// Offset that brings every violated side back onto its limit.
    ///
    /// When both sides of an axis are violated (limits narrower than the
    /// element), left and top win, following [`Side::ORDER`].
    pub fn correction(&self) -> Vec2 {
        let x = if self.left >= 0.0 {
            self.left
        } else if self.right >= 0.0 {
            -self.right
        } else {
            0.0
        };
        let y = if self.top >= 0.0 {
            self.top
        } else if self.bottom >= 0.0 {
            -self.bottom
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

// ============================================================================
// Bound policies
// ============================================================================

/// Decides what happens to the element when a move crosses a limit.
///
/// `violation` is the first violated side in [`Side::ORDER`]; `overshoot`
/// holds the scalars for every side. Returning `Some` records the value as
/// the current translation and applies it to the element. Returning `None`
/// leaves the element where it was. The move callback is not invoked either
/// way.
pub trait BoundPolicy {
    fn bound(
        &mut self,
        violation: Violation,
        overshoot: Overshoot,
        candidate: Translate,
    ) -> Option<Translate>;
}

impl<F> BoundPolicy for F
where
    F: FnMut(Violation, Overshoot, Translate) -> Option<Translate>,
{
    fn bound(
        &mut self,
        violation: Violation,
        overshoot: Overshoot,
        candidate: Translate,
    ) -> Option<Translate> {
        self(violation, overshoot, candidate)
    }
}

/// Pull the candidate back so the element rests on every limit it crossed.
///
/// Each axis is corrected independently, so a move past a corner ends on
/// the corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampToEdge;

impl BoundPolicy for ClampToEdge {
    fn bound(
        &mut self,
        _violation: Violation,
        overshoot: Overshoot,
        candidate: Translate,
    ) -> Option<Translate> {
        Some(candidate + overshoot.correction())
    }
}

/// Ignore the offending move and keep the last translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldPosition;

impl BoundPolicy for HoldPosition {
    fn bound(
        &mut self,
        _violation: Violation,
        _overshoot: Overshoot,
        _candidate: Translate,
    ) -> Option<Translate> {
        None
    }
}
