//! Interfaces the controller needs from its host.
//!
//! The controller never talks to a windowing system directly. It queries
//! geometry and pushes translations through [`Element`], and it registers
//! interest in pointer notifications through [`EventSource`]. The host then
//! routes matching notifications to `Draggable::on_pointer_*`.
//!
//! ## Modules
//!
//! - `memory` - In-memory element and event source for tests and replays

pub mod memory;

use crate::types::{ElementBox, Translate, Vec2};
use serde::Serialize;
use std::rc::Rc;
use std::sync::Arc;

/// Geometry queries and transform application for the dragged element.
///
/// Implementors are handles: cheap to hold, referring to a visual node the
/// host owns. Methods take `&self`; use interior mutability for state.
pub trait Element {
    /// Viewport-relative box, including any translation already applied.
    fn client_box(&self) -> ElementBox;

    /// Document scroll offset added to `client_box` to obtain page space.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Render the element offset by `translate`.
    fn apply_translate(&self, translate: Translate);
}

impl<T: Element + ?Sized> Element for &T {
    fn client_box(&self) -> ElementBox {
        (**self).client_box()
    }

    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    fn apply_translate(&self, translate: Translate) {
        (**self).apply_translate(translate)
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    fn client_box(&self) -> ElementBox {
        (**self).client_box()
    }

    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    fn apply_translate(&self, translate: Translate) {
        (**self).apply_translate(translate)
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    fn client_box(&self) -> ElementBox {
        (**self).client_box()
    }

    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    fn apply_translate(&self, translate: Translate) {
        (**self).apply_translate(translate)
    }
}

/// Pointer notification kinds the controller subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
}

/// Where a subscription listens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Only notifications over the target element
    Target,
    /// Notifications anywhere in the document
    Global,
}

/// Handle returned by [`EventSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Subscription management on the host event system.
pub trait EventSource {
    fn subscribe(&mut self, kind: EventKind, scope: Scope) -> SubscriptionId;

    /// Unknown or already-removed ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}
