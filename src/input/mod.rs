//! Pointer drag controller.
//!
//! [`Draggable`] turns press-move-release notifications into translations for
//! one target element, honoring the configured bounds, and reports them
//! through a [`DragHandler`]. Programmatic moves replay the same callback
//! protocol without a gesture.
//!
//! ## Architecture
//!
//! The controller holds an explicit [`GestureState`] and its own subscription
//! handles. Nothing is registered until [`Draggable::attach`], and
//! [`Draggable::detach`] removes every subscription it still holds.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine and per-gesture session
//! - `mouse_down` - Press handling (Idle -> Dragging)
//! - `drag` - Move handling (bounds check, drag callback)
//! - `mouse_up` - Release handling (Dragging -> Idle)
//! - `request` - Programmatic repositioning
//! - `coords` - Page-space geometry helpers

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod request;
mod state;

pub use drag::MoveOutcome;
pub use request::DragRequest;
pub use state::{GestureState, Session};

use crate::bounds::{BoundPolicy, Bounds, ClampToEdge};
use crate::handlers::DragHandler;
use crate::host::{Element, EventKind, EventSource, Scope, SubscriptionId};
use crate::options::DragOptions;
use crate::types::Translate;
use tracing::debug;

/// Subscription handles held by a controller.
#[derive(Debug, Default)]
struct Subscriptions {
    pointer_down: Option<SubscriptionId>,
    pointer_up: Option<SubscriptionId>,
    pointer_move: Option<SubscriptionId>,
}

impl Subscriptions {
    fn is_attached(&self) -> bool {
        self.pointer_down.is_some() || self.pointer_up.is_some()
    }

    fn take_all(&mut self) -> [Option<SubscriptionId>; 3] {
        [
            self.pointer_move.take(),
            self.pointer_down.take(),
            self.pointer_up.take(),
        ]
    }
}

/// Drag controller for a single target element.
///
/// `E` is a handle to the host's element, `H` receives lifecycle callbacks,
/// and `P` decides what happens at the bounds (see [`ClampToEdge`]).
///
/// State is not synchronized: keep each controller on the thread that
/// delivers its pointer notifications.
pub struct Draggable<E, H, P = ClampToEdge> {
    target: E,
    bounds: Bounds,
    handlers: H,
    policy: P,
    state: GestureState,
    /// Last value passed to `DragStart::set`, kept across gestures for
    /// relative requests
    last_start_translate: Option<Translate>,
    subscriptions: Subscriptions,
}

impl<E, H> Draggable<E, H, ClampToEdge>
where
    E: Element,
    H: DragHandler<E>,
{
    /// Create a controller. Bounds are resolved here and never change.
    pub fn new(target: E, options: DragOptions, handlers: H) -> Self {
        let bounds = Bounds::resolve(options.bounds.as_ref());
        debug!(?bounds, "Draggable created");
        Self {
            target,
            bounds,
            handlers,
            policy: ClampToEdge,
            state: GestureState::default(),
            last_start_translate: None,
            subscriptions: Subscriptions::default(),
        }
    }
}

impl<E, H, P> Draggable<E, H, P>
where
    E: Element,
    H: DragHandler<E>,
    P: BoundPolicy,
{
    /// Replace the bound policy.
    pub fn with_policy<Q: BoundPolicy>(self, policy: Q) -> Draggable<E, H, Q> {
        Draggable {
            target: self.target,
            bounds: self.bounds,
            handlers: self.handlers,
            policy,
            state: self.state,
            last_start_translate: self.last_start_translate,
            subscriptions: self.subscriptions,
        }
    }

    /// Subscribe to presses on the target and releases anywhere.
    ///
    /// Attaching an already attached controller does nothing.
    pub fn attach<S: EventSource + ?Sized>(&mut self, source: &mut S) {
        if self.subscriptions.is_attached() {
            debug!("Draggable already attached");
            return;
        }
        self.subscriptions.pointer_down =
            Some(source.subscribe(EventKind::PointerDown, Scope::Target));
        self.subscriptions.pointer_up =
            Some(source.subscribe(EventKind::PointerUp, Scope::Global));
        debug!("Draggable attached");
    }

    /// Remove every subscription this controller holds.
    ///
    /// A gesture in progress is abandoned without a `drag_end` callback.
    pub fn detach<S: EventSource + ?Sized>(&mut self, source: &mut S) {
        for id in self.subscriptions.take_all().into_iter().flatten() {
            source.unsubscribe(id);
        }
        if let Some(session) = self.state.finish() {
            debug!(translate = ?session.current_translate, "Gesture abandoned on detach");
        }
        debug!("Draggable detached");
    }

    pub fn is_attached(&self) -> bool {
        self.subscriptions.is_attached()
    }

    /// Returns true between an accepted press and its release
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Translation of the gesture in progress, if any
    pub fn current_translate(&self) -> Option<Translate> {
        self.state.session().map(|session| session.current_translate)
    }

    /// Base used by relative requests
    pub fn last_start_translate(&self) -> Option<Translate> {
        self.last_start_translate
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn target(&self) -> &E {
        &self.target
    }

    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut H {
        &mut self.handlers
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Consume the controller and return its handler.
    ///
    /// Detach first: subscriptions still held are not released.
    pub fn into_handlers(self) -> H {
        self.handlers
    }
}
