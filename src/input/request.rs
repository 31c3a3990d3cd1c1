//! Programmatic repositioning.
//!
//! A request replays `drag_start`, `drag` and `drag_end` synchronously for a
//! caller-chosen translation. No bounds are applied on this path: callers are
//! expected to pass valid coordinates.

use super::Draggable;
use crate::bounds::BoundPolicy;
use crate::error::{RequestError, RequestResult};
use crate::handlers::{Drag, DragEnd, DragHandler, DragStart};
use crate::host::Element;
use crate::profile_scope;
use crate::types::{CssTransform, Translate};
use serde::Deserialize;
use tracing::debug;

/// Target of a programmatic move.
///
/// Either `x` and `y` (absolute translation) or `delta_x` and `delta_y`
/// (relative to the last start translation) must both be present. The
/// absolute pair wins when both pairs are given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragRequest {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub delta_x: Option<f64>,
    pub delta_y: Option<f64>,
}

impl DragRequest {
    pub fn absolute(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn relative(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x: Some(delta_x),
            delta_y: Some(delta_y),
            ..Self::default()
        }
    }

    /// Translation this request asks for, given the current relative base.
    pub fn resolve(&self, base: Translate) -> RequestResult<Translate> {
        match *self {
            Self {
                x: Some(x),
                y: Some(y),
                ..
            } => Ok(Translate::new(x, y)),
            Self {
                delta_x: Some(dx),
                delta_y: Some(dy),
                ..
            } => Ok(Translate::new(base.x + dx, base.y + dy)),
            Self {
                x: None,
                y: None,
                delta_x: None,
                delta_y: None,
            } => Err(RequestError::Empty),
            Self { x: Some(_), .. } => Err(RequestError::Incomplete("y")),
            Self { y: Some(_), .. } => Err(RequestError::Incomplete("x")),
            Self {
                delta_x: Some(_), ..
            } => Err(RequestError::Incomplete("deltaY")),
            Self { .. } => Err(RequestError::Incomplete("deltaX")),
        }
    }
}

impl<E, H, P> Draggable<E, H, P>
where
    E: Element,
    H: DragHandler<E>,
    P: BoundPolicy,
{
    /// Move the element without a gesture.
    ///
    /// Returns false, without invoking any callback, if the request carries
    /// neither a complete absolute nor a complete relative pair.
    pub fn request(&mut self, request: DragRequest) -> bool {
        match self.try_request(request) {
            Ok(_) => true,
            Err(e) => {
                debug!(?request, "Request rejected: {}", e);
                false
            }
        }
    }

    /// Like [`request`](Self::request), reporting why a request was rejected.
    ///
    /// A gesture in progress is left untouched.
    pub fn try_request(&mut self, request: DragRequest) -> RequestResult<Translate> {
        profile_scope!("try_request");

        let base = self.last_start_translate.unwrap_or_default();
        let translate = request.resolve(base)?;

        let mut recorded: Option<Translate> = None;
        let stopped = {
            let mut ctx = DragStart::for_request(&mut recorded);
            self.handlers.drag_start(&mut ctx);
            ctx.is_stopped()
        };
        if recorded.is_some() {
            self.last_start_translate = recorded;
        }
        if stopped {
            debug!("stop() has no effect on a programmatic request");
        }

        self.handlers.drag(&Drag {
            input: None,
            target: &self.target,
            transform: CssTransform(translate),
            translate,
            delta: None,
        });

        // DragEnd is Copy: callers never share storage with the controller
        self.handlers.drag_end(DragEnd { translate });

        debug!(?translate, "Request applied");
        Ok(translate)
    }
}
