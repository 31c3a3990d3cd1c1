//! Release handling - finish the gesture and report the final translation.

use super::Draggable;
use crate::bounds::BoundPolicy;
use crate::handlers::{DragEnd, DragHandler};
use crate::host::{Element, EventSource};
use crate::profile_scope;
use crate::types::PointerEvent;
use tracing::{debug, trace};

impl<E, H, P> Draggable<E, H, P>
where
    E: Element,
    H: DragHandler<E>,
    P: BoundPolicy,
{
    /// Handle a release anywhere in the document.
    ///
    /// Releases while idle are ignored. Otherwise the move subscription is
    /// dropped and `drag_end` receives the last accepted translation.
    pub fn on_pointer_up<S: EventSource + ?Sized>(
        &mut self,
        event: &PointerEvent,
        source: &mut S,
    ) -> Option<DragEnd> {
        profile_scope!("on_pointer_up");

        let Some(session) = self.state.finish() else {
            trace!(page = ?event.page, "Release while idle");
            return None;
        };

        if let Some(id) = self.subscriptions.pointer_move.take() {
            source.unsubscribe(id);
        }

        let end = DragEnd {
            translate: session.current_translate,
        };
        debug!(translate = ?end.translate, "Drag ended");
        self.handlers.drag_end(end);
        Some(end)
    }
}
