//! Lifecycle callbacks and their payloads.
//!
//! Hosts observe a drag through [`DragHandler`], whose three operations are
//! independently optional: every method has a no-op default. [`Callbacks`]
//! offers the same contract built from closures.

use crate::host::Element;
use crate::types::{CssTransform, PointerEvent, Translate, Vec2};
use serde::Serialize;

// ============================================================================
// Payloads
// ============================================================================

/// Context handed to [`DragHandler::drag_start`].
///
/// The handler must call [`set`](Self::set) with the translation currently in
/// effect, and may call [`stop`](Self::stop) to refuse the drag.
pub struct DragStart<'a> {
    input: Option<&'a PointerEvent>,
    target: Option<&'a dyn Element>,
    start_translate: &'a mut Option<Translate>,
    stopped: bool,
}

impl<'a> DragStart<'a> {
    /// Context for a live gesture. `set` also applies the translation to `target`.
    pub(crate) fn for_gesture(
        input: &'a PointerEvent,
        target: &'a dyn Element,
        start_translate: &'a mut Option<Translate>,
    ) -> Self {
        Self {
            input: Some(input),
            target: Some(target),
            start_translate,
            stopped: false,
        }
    }

    /// Context for a programmatic request: no input event, `set` only records.
    pub(crate) fn for_request(start_translate: &'a mut Option<Translate>) -> Self {
        Self {
            input: None,
            target: None,
            start_translate,
            stopped: false,
        }
    }

    /// The press that started the gesture. `None` for programmatic requests.
    pub fn input_event(&self) -> Option<&PointerEvent> {
        self.input
    }

    pub fn page(&self) -> Option<Vec2> {
        self.input.map(|event| event.page)
    }

    pub fn client(&self) -> Option<Vec2> {
        self.input.map(|event| event.client)
    }

    /// Record `position` as the start translation.
    pub fn set(&mut self, position: impl Into<Translate>) {
        let position = position.into();
        *self.start_translate = Some(position);
        if let Some(target) = self.target {
            target.apply_translate(position);
        }
    }

    /// Refuse the drag. Only effective for live gestures.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Payload for [`DragHandler::drag`].
#[derive(Debug)]
pub struct Drag<'a, E> {
    /// The move that produced this update. `None` for programmatic requests.
    pub input: Option<&'a PointerEvent>,
    pub target: &'a E,
    pub transform: CssTransform,
    pub translate: Translate,
    /// Pointer travel since the press. `None` for programmatic requests.
    pub delta: Option<Vec2>,
}

/// Payload for [`DragHandler::drag_end`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DragEnd {
    pub translate: Translate,
}

// ============================================================================
// Handler trait
// ============================================================================

/// Host callbacks for the start/move/end protocol.
///
/// Handlers run on the input path and must not block.
pub trait DragHandler<E> {
    fn drag_start(&mut self, _ctx: &mut DragStart<'_>) {}

    fn drag(&mut self, _event: &Drag<'_, E>) {}

    fn drag_end(&mut self, _event: DragEnd) {}
}

/// No callbacks at all.
impl<E> DragHandler<E> for () {}

type StartFn = Box<dyn FnMut(&mut DragStart<'_>)>;
type DragFn<E> = Box<dyn FnMut(&Drag<'_, E>)>;
type EndFn = Box<dyn FnMut(DragEnd)>;

/// Closure-backed handler set; unset callbacks are skipped.
pub struct Callbacks<E> {
    on_start: Option<StartFn>,
    on_drag: Option<DragFn<E>>,
    on_end: Option<EndFn>,
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Callbacks<E> {
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_drag: None,
            on_end: None,
        }
    }

    pub fn on_start(mut self, f: impl FnMut(&mut DragStart<'_>) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_drag(mut self, f: impl FnMut(&Drag<'_, E>) + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut(DragEnd) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }
}

impl<E> DragHandler<E> for Callbacks<E> {
    fn drag_start(&mut self, ctx: &mut DragStart<'_>) {
        if let Some(f) = self.on_start.as_mut() {
            f(ctx);
        }
    }

    fn drag(&mut self, event: &Drag<'_, E>) {
        if let Some(f) = self.on_drag.as_mut() {
            f(event);
        }
    }

    fn drag_end(&mut self, event: DragEnd) {
        if let Some(f) = self.on_end.as_mut() {
            f(event);
        }
    }
}
