//! Gesture Integration Tests

use crate::helpers::{Call, Recorder, TestDraggableBuilder, t};
use moveable::host::memory::{Delivery, MemoryElement, MemoryEventSource};
use moveable::input::coords::CoordinateConverter;
use moveable::{
    BoundsConfig, DragOptions, DragRequest, Draggable, ElementBox, ElementRect, EventKind,
    HoldPosition, MoveOutcome, Overshoot, Side, Translate, Vec2, Violation,
};

#[test]
fn test_bounded_move_clamps_then_resumes() {
    let mut rig = TestDraggableBuilder::new()
        .with_box(0.0, 0.0, 50.0, 50.0)
        .with_bounds(BoundsConfig::new().with_right(100.0))
        .build();

    assert_eq!(rig.press(10.0, 10.0), Delivery::Pressed(true));

    // Right edge would reach 110
    let outcome = rig.move_to(70.0, 10.0);
    assert_eq!(
        outcome,
        Delivery::Moved(MoveOutcome::Bounded {
            violation: Violation {
                side: Side::Right,
                overshoot: 10.0,
            },
            clamped: Some(t(50.0, 0.0)),
        })
    );
    assert_eq!(rig.element.translate(), t(50.0, 0.0));
    assert!(rig.recorder().drags().is_empty());

    // Back inside the limits
    let outcome = rig.move_to(30.0, 10.0);
    assert_eq!(
        outcome,
        Delivery::Moved(MoveOutcome::Moved {
            translate: t(20.0, 0.0),
            delta: Vec2::new(20.0, 0.0),
        })
    );
    assert_eq!(
        rig.calls().last(),
        Some(&Call::Drag {
            translate: t(20.0, 0.0),
            transform: "translate(20px,0px)".to_string(),
            delta: Some(Vec2::new(20.0, 0.0)),
        })
    );

    assert_eq!(rig.release(30.0, 10.0), Delivery::Released(true));
    assert_eq!(rig.recorder().ends(), vec![t(20.0, 0.0)]);
}

#[test]
fn test_translation_is_start_plus_pointer_travel() {
    let mut rig = TestDraggableBuilder::new()
        .with_box(0.0, 0.0, 200.0, 200.0)
        .start_at(5.0, -5.0)
        .build();

    rig.press(100.0, 100.0);
    rig.move_to(130.0, 90.0);
    rig.move_to(90.0, 140.0);
    rig.release(90.0, 140.0);

    assert_eq!(rig.recorder().drags(), vec![t(35.0, -15.0), t(-5.0, 35.0)]);
    assert_eq!(rig.recorder().ends(), vec![t(-5.0, 35.0)]);
}

#[test]
fn test_release_while_idle_is_ignored() {
    let mut rig = TestDraggableBuilder::new().build();

    assert_eq!(rig.release(10.0, 10.0), Delivery::Released(false));
    assert!(rig.calls().is_empty());
    assert!(!rig.draggable.is_dragging());
}

#[test]
fn test_stop_refuses_gesture() {
    let mut rig = TestDraggableBuilder::new().stopping().build();

    assert_eq!(rig.press(10.0, 10.0), Delivery::Pressed(false));
    assert!(!rig.draggable.is_dragging());
    assert!(!rig.source.is_subscribed(EventKind::PointerMove));

    // Moves never reach the controller
    assert_eq!(rig.move_to(40.0, 10.0), Delivery::Dropped);
    assert_eq!(rig.release(40.0, 10.0), Delivery::Released(false));
    assert_eq!(
        rig.calls().to_vec(),
        vec![Call::Start {
            page: Some(Vec2::new(10.0, 10.0)),
        }]
    );
}

#[test]
fn test_immediate_release_reports_start_translate() {
    let mut rig = TestDraggableBuilder::new().start_at(7.0, 3.0).build();

    rig.press(10.0, 10.0);
    assert_eq!(rig.draggable.current_translate(), Some(t(7.0, 3.0)));
    rig.release(10.0, 10.0);

    assert_eq!(rig.recorder().ends(), vec![t(7.0, 3.0)]);
}

#[test]
fn test_missing_set_defaults_to_origin() {
    let mut rig = TestDraggableBuilder::new()
        .without_start_translate()
        .build();

    assert_eq!(rig.press(10.0, 10.0), Delivery::Pressed(true));
    rig.move_to(20.0, 15.0);

    assert_eq!(rig.recorder().drags(), vec![t(10.0, 5.0)]);
    assert_eq!(rig.draggable.last_start_translate(), None);
}

#[test]
fn test_moves_prevent_default_even_when_bounded() {
    let mut rig = TestDraggableBuilder::new()
        .with_bounds(BoundsConfig::new().with_right(100.0))
        .build();
    rig.press(10.0, 10.0);

    let (_, accepted) = rig.dispatch(EventKind::PointerMove, 20.0, 10.0);
    assert!(accepted.is_default_prevented());

    let (delivery, bounded) = rig.dispatch(EventKind::PointerMove, 200.0, 10.0);
    assert!(matches!(
        delivery,
        Delivery::Moved(MoveOutcome::Bounded { .. })
    ));
    assert!(bounded.is_default_prevented());
}

#[test]
fn test_move_while_idle_is_ignored() {
    let mut rig = TestDraggableBuilder::new().build();
    let mut event = rig.event(30.0, 30.0);

    assert_eq!(rig.draggable.on_pointer_move(&mut event), MoveOutcome::Ignored);
    assert!(!event.is_default_prevented());
}

#[test]
fn test_press_while_dragging_is_ignored() {
    let mut rig = TestDraggableBuilder::new().build();

    assert_eq!(rig.press(10.0, 10.0), Delivery::Pressed(true));
    rig.move_to(20.0, 10.0);
    assert_eq!(rig.press(25.0, 10.0), Delivery::Pressed(false));

    assert_eq!(rig.recorder().starts(), 1);
    assert_eq!(rig.draggable.current_translate(), Some(t(10.0, 0.0)));
}

#[test]
fn test_press_outside_target_is_dropped() {
    let mut rig = TestDraggableBuilder::new()
        .with_box(0.0, 0.0, 50.0, 50.0)
        .build();

    assert_eq!(rig.press(80.0, 80.0), Delivery::Dropped);
    assert!(rig.calls().is_empty());
}

#[test]
fn test_left_reported_over_top_and_both_axes_clamped() {
    let mut rig = TestDraggableBuilder::new()
        .with_box(10.0, 10.0, 50.0, 50.0)
        .with_bounds(BoundsConfig::new().with_left(0.0).with_top(0.0))
        .build();

    rig.press(20.0, 20.0);
    let outcome = rig.move_to(0.0, 0.0);

    assert_eq!(
        outcome,
        Delivery::Moved(MoveOutcome::Bounded {
            violation: Violation {
                side: Side::Left,
                overshoot: 10.0,
            },
            clamped: Some(t(-10.0, -10.0)),
        })
    );
}

#[test]
fn test_corner_overshoot_keeps_element_inside_bounds() {
    let mut rig = TestDraggableBuilder::new()
        .with_box(10.0, 10.0, 50.0, 50.0)
        .with_bounds(BoundsConfig::new().with_left(0.0).with_top(0.0))
        .build();

    rig.press(20.0, 20.0);
    rig.move_to(0.0, 0.0);

    let rendered = CoordinateConverter::page_rect(&rig.element);
    assert_eq!(rendered, ElementRect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(rig.draggable.current_translate(), Some(t(-10.0, -10.0)));
    assert!(rig.recorder().drags().is_empty());
}

#[test]
fn test_set_applies_start_translate_on_press() {
    let mut rig = TestDraggableBuilder::new().start_at(7.0, 3.0).build();

    rig.press(10.0, 10.0);

    assert_eq!(rig.element.applied(), vec![t(7.0, 3.0)]);
    assert_eq!(rig.element.translate(), t(7.0, 3.0));
}

#[test]
fn test_set_only_records_on_request() {
    let mut rig = TestDraggableBuilder::new().start_at(7.0, 3.0).build();

    assert!(rig.draggable.request(DragRequest::absolute(40.0, 30.0)));

    // Recorder does not render drags, and set must not render either
    assert!(rig.element.applied().is_empty());
    assert_eq!(rig.draggable.last_start_translate(), Some(t(7.0, 3.0)));
}

#[test]
fn test_bounds_use_page_coordinates_when_scrolled() {
    // Laid out at page y=100, scrolled 40px: client top is 60
    let mut rig = TestDraggableBuilder::new()
        .with_box(0.0, 100.0, 50.0, 50.0)
        .with_scroll(0.0, 40.0)
        .with_bounds(BoundsConfig::new().with_bottom(200.0))
        .build();

    assert_eq!(rig.press(10.0, 110.0), Delivery::Pressed(true));

    let outcome = rig.move_to(10.0, 170.0);
    assert_eq!(
        outcome,
        Delivery::Moved(MoveOutcome::Bounded {
            violation: Violation {
                side: Side::Bottom,
                overshoot: 10.0,
            },
            clamped: Some(t(0.0, 50.0)),
        })
    );

    rig.move_to(10.0, 130.0);
    assert_eq!(rig.recorder().drags(), vec![t(0.0, 20.0)]);
}

#[test]
fn test_touching_a_limit_counts_as_violation() {
    let mut rig = TestDraggableBuilder::new()
        .with_bounds(BoundsConfig::new().with_right(100.0))
        .build();
    rig.press(10.0, 10.0);

    // Right edge lands exactly on 100
    let outcome = rig.move_to(60.0, 10.0);
    assert_eq!(
        outcome,
        Delivery::Moved(MoveOutcome::Bounded {
            violation: Violation {
                side: Side::Right,
                overshoot: 0.0,
            },
            clamped: Some(t(50.0, 0.0)),
        })
    );
}

#[test]
fn test_hold_position_keeps_last_translation() {
    moveable::logging::init_for_tests();
    let element = MemoryElement::new(ElementBox::new(0.0, 0.0, 50.0, 50.0));
    let options = DragOptions::new().with_bounds(BoundsConfig::new().with_right(100.0));
    let mut draggable = Draggable::new(element.clone(), options, Recorder::starting_at(Vec2::ZERO))
        .with_policy(HoldPosition);
    let mut source = MemoryEventSource::new();
    draggable.attach(&mut source);

    let mut event = moveable::PointerEvent::at(10.0, 10.0);
    source.dispatch(&mut draggable, EventKind::PointerDown, &mut event);
    let mut event = moveable::PointerEvent::at(30.0, 10.0);
    source.dispatch(&mut draggable, EventKind::PointerMove, &mut event);
    let mut event = moveable::PointerEvent::at(300.0, 10.0);
    let delivery = source.dispatch(&mut draggable, EventKind::PointerMove, &mut event);

    assert!(matches!(
        delivery,
        Delivery::Moved(MoveOutcome::Bounded { clamped: None, .. })
    ));
    assert_eq!(draggable.current_translate(), Some(t(20.0, 0.0)));

    let mut event = moveable::PointerEvent::at(300.0, 10.0);
    source.dispatch(&mut draggable, EventKind::PointerUp, &mut event);
    assert_eq!(draggable.handlers().ends(), vec![t(20.0, 0.0)]);
}

#[test]
fn test_closure_policy() {
    moveable::logging::init_for_tests();
    let element = MemoryElement::new(ElementBox::new(0.0, 0.0, 50.0, 50.0));
    let options = DragOptions::new().with_bounds(BoundsConfig::new().with_right(100.0));
    let mut seen: Vec<Side> = Vec::new();
    let policy = |violation: Violation, _: Overshoot, _: Translate| -> Option<Translate> {
        seen.push(violation.side);
        Some(Translate::ZERO)
    };
    let mut draggable = Draggable::new(element.clone(), options, Recorder::starting_at(Vec2::ZERO))
        .with_policy(policy);

    let mut source = MemoryEventSource::new();
    draggable.attach(&mut source);
    let mut event = moveable::PointerEvent::at(10.0, 10.0);
    source.dispatch(&mut draggable, EventKind::PointerDown, &mut event);
    let mut event = moveable::PointerEvent::at(200.0, 10.0);
    source.dispatch(&mut draggable, EventKind::PointerMove, &mut event);

    assert_eq!(draggable.current_translate(), Some(Translate::ZERO));
    assert_eq!(element.translate(), Translate::ZERO);
    drop(draggable);
    assert_eq!(seen, vec![Side::Right]);
}
