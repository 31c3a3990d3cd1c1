//! Coordinate conversion for gesture math.
//!
//! Keeps the page-space formulas in one place so press, move and replay
//! handling agree on them.

use crate::host::Element;
use crate::types::{ElementRect, Translate, Vec2};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Absolute (page space) edges of `element`
    #[inline]
    pub fn page_rect<E: Element + ?Sized>(element: &E) -> ElementRect {
        ElementRect::from_box(element.client_box(), element.scroll_offset())
    }

    /// Pointer travel since the press
    #[inline]
    pub fn pointer_delta(start: Vec2, current: Vec2) -> Vec2 {
        current - start
    }

    /// Translation the element would have if the delta were applied unchecked
    #[inline]
    pub fn candidate_translate(start_translate: Translate, delta: Vec2) -> Translate {
        start_translate + delta
    }
}
