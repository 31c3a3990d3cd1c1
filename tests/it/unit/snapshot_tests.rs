//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the shape of payloads handed to hosts.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestDraggableBuilder;
use moveable::host::memory::Delivery;
use moveable::{BoundsConfig, DragEnd, DragRequest, RequestError, Translate};

#[test]
fn snapshot_drag_end() {
    let end = DragEnd {
        translate: Translate::new(20.0, 0.0),
    };
    insta::assert_debug_snapshot!(end, @r"
    DragEnd {
        translate: Vec2 {
            x: 20.0,
            y: 0.0,
        },
    }
    ");
}

#[test]
fn snapshot_bounded_move() {
    let mut rig = TestDraggableBuilder::new()
        .with_bounds(BoundsConfig::new().with_right(100.0))
        .build();
    rig.press(10.0, 10.0);

    let Delivery::Moved(outcome) = rig.move_to(70.0, 10.0) else {
        panic!("move was not delivered");
    };
    insta::assert_debug_snapshot!(outcome, @r"
    Bounded {
        violation: Violation {
            side: Right,
            overshoot: 10.0,
        },
        clamped: Some(
            Vec2 {
                x: 50.0,
                y: 0.0,
            },
        ),
    }
    ");
}

#[test]
fn snapshot_request_errors() {
    let errors: Vec<String> = [
        DragRequest::default(),
        DragRequest {
            delta_x: Some(1.0),
            ..DragRequest::default()
        },
    ]
    .iter()
    .filter_map(|request| request.resolve(Translate::ZERO).err())
    .map(|e: RequestError| e.to_string())
    .collect();

    insta::assert_debug_snapshot!(errors, @r#"
    [
        "Request carries no position: expected {x, y} or {deltaX, deltaY}",
        "Request is missing `deltaY`",
    ]
    "#);
}
