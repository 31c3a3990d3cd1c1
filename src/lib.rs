//! Pointer drag controller.
//!
//! A [`Draggable`] follows press-move-release gestures on one element,
//! turns pointer travel into a translation, stops movement at the configured
//! [`Bounds`], and reports each step to a [`DragHandler`]. The same callback
//! protocol can be driven without a gesture through [`Draggable::request`].
//!
//! The host supplies element geometry and rendering through [`Element`] and
//! pointer notifications through [`EventSource`]. [`host::memory`] provides
//! in-memory versions of both.

pub mod bounds;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod host;
pub mod input;
pub mod logging;
pub mod options;
pub mod perf;
pub mod replay;
pub mod types;

pub use bounds::{BoundPolicy, Bounds, ClampToEdge, HoldPosition, Overshoot, Side, Violation};
pub use error::{OptionsError, RequestError};
pub use handlers::{Callbacks, Drag, DragEnd, DragHandler, DragStart};
pub use host::{Element, EventKind, EventSource, Scope, SubscriptionId};
pub use input::{DragRequest, Draggable, GestureState, MoveOutcome};
pub use options::{BoundsConfig, DragOptions};
pub use types::{CssTransform, ElementBox, ElementRect, PointerEvent, Translate, Vec2};
