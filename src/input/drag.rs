//! Move handling - bounds check and drag callback.
//!
//! ## Performance Notes
//!
//! Moves arrive at input frequency (often above 60 per second). Handling is
//! a few additions and comparisons followed by the host callback; nothing here
//! allocates.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::Draggable;
use super::coords::CoordinateConverter;
use super::state::GestureState;
use crate::bounds::{BoundPolicy, Violation};
use crate::handlers::{Drag, DragHandler};
use crate::host::Element;
use crate::profile_scope;
use crate::types::{CssTransform, PointerEvent, Translate, Vec2};
use tracing::trace;

/// What a move notification did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture in progress
    Ignored,

    /// Accepted; the drag callback received this translation
    Moved { translate: Translate, delta: Vec2 },

    /// Crossed a limit; the drag callback was skipped
    Bounded {
        violation: Violation,
        /// Translation chosen by the bound policy, if it moved the element
        clamped: Option<Translate>,
    },
}

impl<E, H, P> Draggable<E, H, P>
where
    E: Element,
    H: DragHandler<E>,
    P: BoundPolicy,
{
    /// Handle a pointer move anywhere in the document.
    ///
    /// While dragging, the event's default action is always prevented, even
    /// when the move is rejected at a boundary.
    pub fn on_pointer_move(&mut self, event: &mut PointerEvent) -> MoveOutcome {
        profile_scope!("on_pointer_move");

        let GestureState::Dragging(session) = &mut self.state else {
            return MoveOutcome::Ignored;
        };

        event.prevent_default();

        let delta = CoordinateConverter::pointer_delta(session.start_pointer, event.page);
        let candidate = CoordinateConverter::candidate_translate(session.start_translate, delta);

        let overshoot = self.bounds.overshoot(&session.start_rect, delta);
        if let Some(violation) = overshoot.first_violation() {
            let clamped = self.policy.bound(violation, overshoot, candidate);
            if let Some(translate) = clamped {
                session.current_translate = translate;
                self.target.apply_translate(translate);
            }
            trace!(
                side = ?violation.side,
                overshoot = violation.overshoot,
                ?clamped,
                "Move bounded"
            );
            return MoveOutcome::Bounded { violation, clamped };
        }

        session.current_translate = candidate;
        trace!(translate = ?candidate, ?delta, "Move");

        let event: &PointerEvent = event;
        self.handlers.drag(&Drag {
            input: Some(event),
            target: &self.target,
            transform: CssTransform(candidate),
            translate: candidate,
            delta: Some(delta),
        });

        MoveOutcome::Moved {
            translate: candidate,
            delta,
        }
    }
}
