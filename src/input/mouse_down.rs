//! Press handling - capture the session and ask the host to start.

use super::Draggable;
use super::coords::CoordinateConverter;
use super::state::Session;
use crate::bounds::BoundPolicy;
use crate::handlers::{DragHandler, DragStart};
use crate::host::{Element, EventKind, EventSource, Scope};
use crate::profile_scope;
use crate::types::{PointerEvent, Translate};
use tracing::{debug, warn};

impl<E, H, P> Draggable<E, H, P>
where
    E: Element,
    H: DragHandler<E>,
    P: BoundPolicy,
{
    /// Handle a press on the target.
    ///
    /// Returns true if a gesture started. The `drag_start` handler may refuse
    /// it by calling `stop()`; the controller then stays idle and does not
    /// subscribe to moves.
    pub fn on_pointer_down<S: EventSource + ?Sized>(
        &mut self,
        event: &PointerEvent,
        source: &mut S,
    ) -> bool {
        profile_scope!("on_pointer_down");

        if self.state.is_dragging() {
            debug!(page = ?event.page, "Press ignored: gesture already in progress");
            return false;
        }

        let start_pointer = event.page;
        let start_rect = CoordinateConverter::page_rect(&self.target);

        let mut recorded: Option<Translate> = None;
        let stopped = {
            let mut ctx = DragStart::for_gesture(event, &self.target, &mut recorded);
            self.handlers.drag_start(&mut ctx);
            ctx.is_stopped()
        };

        if recorded.is_some() {
            self.last_start_translate = recorded;
        }

        if stopped {
            debug!(page = ?start_pointer, "Drag refused by start handler");
            return false;
        }

        let start_translate = recorded.unwrap_or_else(|| {
            warn!("drag_start did not set a start translation; assuming origin");
            Translate::ZERO
        });

        self.state
            .start(Session::new(start_translate, start_pointer, start_rect));
        self.subscriptions.pointer_move =
            Some(source.subscribe(EventKind::PointerMove, Scope::Global));

        debug!(
            page = ?start_pointer,
            translate = ?start_translate,
            rect = ?start_rect,
            "Drag started"
        );
        true
    }
}
