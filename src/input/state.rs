//! Gesture state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (press on the target, dragStart did not call stop)
//! Dragging -> Idle     (release anywhere, or controller detached)
//! ```
//!
//! Session data only exists inside `Dragging`, so it is reset by construction
//! for every gesture.

use crate::types::{ElementRect, Translate, Vec2};

/// Values captured at press time plus the last accepted translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    /// Translation in effect when the gesture began
    pub start_translate: Translate,
    /// Pointer position (page space) at press
    pub start_pointer: Vec2,
    /// Element edges (page space) at press
    pub start_rect: ElementRect,
    /// Last translation accepted by a move or a bound policy
    pub current_translate: Translate,
}

impl Session {
    pub fn new(start_translate: Translate, start_pointer: Vec2, start_rect: ElementRect) -> Self {
        Self {
            start_translate,
            start_pointer,
            start_rect,
            // Reported by a release that arrives before any move
            current_translate: start_translate,
        }
    }
}

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Between an accepted press and its release
    Dragging(Session),
}

impl GestureState {
    /// Returns true if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the active session, if dragging
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Begin a gesture
    pub fn start(&mut self, session: Session) {
        *self = Self::Dragging(session);
    }

    /// Return to Idle, handing back the session that was active
    pub fn finish(&mut self) -> Option<Session> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
