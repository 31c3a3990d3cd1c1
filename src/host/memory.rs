//! In-memory host: an element with a stored layout and an event source that
//! routes notifications only to live subscriptions.
//!
//! Used by the replay tool and the test suite. The element behaves like a
//! DOM node whose bounding box moves with its applied transform.

use super::{Element, EventKind, EventSource, Scope, SubscriptionId};
use crate::bounds::BoundPolicy;
use crate::handlers::DragHandler;
use crate::input::{Draggable, MoveOutcome};
use crate::input::coords::CoordinateConverter;
use crate::types::{ElementBox, PointerEvent, Translate, Vec2};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

// ============================================================================
// Element
// ============================================================================

#[derive(Debug, Default)]
struct ElementState {
    /// Untransformed box in page space
    layout: ElementBox,
    scroll: Vec2,
    translate: Translate,
    /// Every translation applied, oldest first
    applied: Vec<Translate>,
}

/// Shared handle to an in-memory element. Clones refer to the same element.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    inner: Arc<Mutex<ElementState>>,
}

impl MemoryElement {
    pub fn new(layout: ElementBox) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ElementState {
                layout,
                ..ElementState::default()
            })),
        }
    }

    pub fn with_scroll(self, scroll: Vec2) -> Self {
        self.inner.lock().scroll = scroll;
        self
    }

    pub fn set_scroll(&self, scroll: Vec2) {
        self.inner.lock().scroll = scroll;
    }

    /// Translation currently rendered
    pub fn translate(&self) -> Translate {
        self.inner.lock().translate
    }

    /// All translations applied so far, oldest first
    pub fn applied(&self) -> Vec<Translate> {
        self.inner.lock().applied.clone()
    }

    pub fn layout(&self) -> ElementBox {
        self.inner.lock().layout
    }
}

impl Element for MemoryElement {
    fn client_box(&self) -> ElementBox {
        let state = self.inner.lock();
        ElementBox::new(
            state.layout.left + state.translate.x - state.scroll.x,
            state.layout.top + state.translate.y - state.scroll.y,
            state.layout.width,
            state.layout.height,
        )
    }

    fn scroll_offset(&self) -> Vec2 {
        self.inner.lock().scroll
    }

    fn apply_translate(&self, translate: Translate) {
        let mut state = self.inner.lock();
        state.translate = translate;
        state.applied.push(translate);
    }
}

// ============================================================================
// Event source
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Registration {
    id: SubscriptionId,
    kind: EventKind,
    scope: Scope,
}

/// Event source that keeps its subscription table in memory.
#[derive(Debug, Default)]
pub struct MemoryEventSource {
    next_id: u64,
    active: Vec<Registration>,
}

impl EventSource for MemoryEventSource {
    fn subscribe(&mut self, kind: EventKind, scope: Scope) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId::new(self.next_id);
        self.active.push(Registration { id, kind, scope });
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.retain(|registration| registration.id != id);
    }
}

/// Result of routing one notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delivery {
    /// No live subscription matched
    Dropped,
    /// A press reached the controller; true if a gesture started
    Pressed(bool),
    Moved(MoveOutcome),
    /// A release reached the controller; true if a gesture ended
    Released(bool),
}

impl MemoryEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.active.iter().any(|registration| registration.kind == kind)
    }

    fn scope_of(&self, kind: EventKind) -> Option<Scope> {
        self.active
            .iter()
            .find(|registration| registration.kind == kind)
            .map(|registration| registration.scope)
    }

    /// Deliver `event` to `draggable` if it holds a matching subscription.
    ///
    /// Target-scoped subscriptions only receive events inside the target's
    /// current page rectangle.
    pub fn dispatch<E, H, P>(
        &mut self,
        draggable: &mut Draggable<E, H, P>,
        kind: EventKind,
        event: &mut PointerEvent,
    ) -> Delivery
    where
        E: Element,
        H: DragHandler<E>,
        P: BoundPolicy,
    {
        let Some(scope) = self.scope_of(kind) else {
            trace!(?kind, "No subscription, event dropped");
            return Delivery::Dropped;
        };

        if scope == Scope::Target
            && !CoordinateConverter::page_rect(draggable.target()).contains(event.page)
        {
            trace!(?kind, page = ?event.page, "Event outside target, dropped");
            return Delivery::Dropped;
        }

        match kind {
            EventKind::PointerDown => Delivery::Pressed(draggable.on_pointer_down(event, self)),
            EventKind::PointerMove => Delivery::Moved(draggable.on_pointer_move(event)),
            EventKind::PointerUp => {
                Delivery::Released(draggable.on_pointer_up(event, self).is_some())
            }
        }
    }
}
