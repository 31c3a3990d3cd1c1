//! Scripted gesture replay.
//!
//! A [`Script`] describes an element, options and a sequence of pointer
//! steps and requests. [`run`] drives a real [`Draggable`] against the
//! in-memory host and returns every callback and bound decision in order.
//!
//! ```json
//! {
//!   "element": { "left": 0, "top": 0, "width": 50, "height": 50 },
//!   "options": { "bounds": { "right": 100 } },
//!   "steps": [
//!     { "down": { "x": 10, "y": 10 } },
//!     { "move": { "x": 30, "y": 10 } },
//!     { "up": { "x": 30, "y": 10 } },
//!     { "request": { "deltaX": 5, "deltaY": 0 } }
//!   ]
//! }
//! ```

use crate::bounds::Side;
use crate::constants::FRAME_BUDGET_MS;
use crate::handlers::{Drag, DragEnd, DragHandler, DragStart};
use crate::host::{Element, EventKind};
use crate::host::memory::{Delivery, MemoryElement, MemoryEventSource};
use crate::input::{DragRequest, Draggable, MoveOutcome};
use crate::options::DragOptions;
use crate::perf::measure_and_log;
use crate::types::{ElementBox, PointerEvent, Translate, Vec2};
use serde::{Deserialize, Serialize};

/// Input for [`run`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Script {
    /// Untransformed element box in page space
    pub element: ElementBox,
    #[serde(default)]
    pub scroll: Vec2,
    #[serde(default)]
    pub options: DragOptions,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One scripted action. Pointer positions are in page space.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Request(DragRequest),
}

/// One observation made while replaying.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record {
    DragStart {
        page: Option<Vec2>,
        translate: Translate,
    },
    Drag {
        translate: Translate,
        transform: String,
        delta: Option<Vec2>,
    },
    DragEnd {
        translate: Translate,
    },
    Bounded {
        side: Side,
        overshoot: f64,
        clamped: Option<Translate>,
    },
    Dropped {
        kind: EventKind,
    },
    Rejected {
        error: String,
    },
}

/// Handler that starts every drag from the element's rendered translation.
struct Recorder {
    element: MemoryElement,
    records: Vec<Record>,
}

impl DragHandler<MemoryElement> for Recorder {
    fn drag_start(&mut self, ctx: &mut DragStart<'_>) {
        let translate = self.element.translate();
        ctx.set(translate);
        self.records.push(Record::DragStart {
            page: ctx.page(),
            translate,
        });
    }

    fn drag(&mut self, event: &Drag<'_, MemoryElement>) {
        // The host renders accepted moves
        event.target.apply_translate(event.translate);
        self.records.push(Record::Drag {
            translate: event.translate,
            transform: event.transform.to_string(),
            delta: event.delta,
        });
    }

    fn drag_end(&mut self, event: DragEnd) {
        self.records.push(Record::DragEnd {
            translate: event.translate,
        });
    }
}

type ReplayDraggable = Draggable<MemoryElement, Recorder>;

/// Replay `script` and return what happened, in order.
pub fn run(script: &Script) -> Vec<Record> {
    let element = MemoryElement::new(script.element).with_scroll(script.scroll);
    let recorder = Recorder {
        element: element.clone(),
        records: Vec::new(),
    };
    let mut draggable = Draggable::new(element, script.options, recorder);
    let mut source = MemoryEventSource::new();
    draggable.attach(&mut source);

    for step in &script.steps {
        measure_and_log("replay_step", FRAME_BUDGET_MS, || {
            apply_step(&mut draggable, &mut source, *step, script.scroll)
        });
    }

    draggable.detach(&mut source);
    draggable.into_handlers().records
}

fn apply_step(
    draggable: &mut ReplayDraggable,
    source: &mut MemoryEventSource,
    step: Step,
    scroll: Vec2,
) {
    let (kind, x, y) = match step {
        Step::Down { x, y } => (EventKind::PointerDown, x, y),
        Step::Move { x, y } => (EventKind::PointerMove, x, y),
        Step::Up { x, y } => (EventKind::PointerUp, x, y),
        Step::Request(request) => {
            if let Err(e) = draggable.try_request(request) {
                draggable.handlers_mut().records.push(Record::Rejected {
                    error: e.to_string(),
                });
            }
            return;
        }
    };

    let page = Vec2::new(x, y);
    let mut event = PointerEvent::new(page, page - scroll);
    let record = match source.dispatch(draggable, kind, &mut event) {
        Delivery::Dropped => Some(Record::Dropped { kind }),
        Delivery::Moved(MoveOutcome::Bounded { violation, clamped }) => Some(Record::Bounded {
            side: violation.side,
            overshoot: violation.overshoot,
            clamped,
        }),
        _ => None,
    };
    if let Some(record) = record {
        draggable.handlers_mut().records.push(record);
    }
}
