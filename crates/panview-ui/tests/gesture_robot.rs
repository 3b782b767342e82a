use std::cell::{Cell, RefCell};
use std::rc::Rc;

use panview_core::FrameClock;
use panview_testing::{ManualTicker, PanRobot};
use panview_ui::{
    PanEvent, PanGestureAction, PanGestureSettings, PanGestureView, SwipeDirection,
};
use panview_ui_graphics::{Icon, Point};

fn register_counter(view: &PanGestureView, direction: SwipeDirection) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let action = PanGestureAction::new(direction, Icon::named("chevron"))
        .on_trigger(move |_| counter.set(counter.get() + 1));
    view.register(action).expect("valid direction");
    count
}

#[test]
fn swipe_past_threshold_triggers_after_settle() {
    let mut robot = PanRobot::new();
    let count = register_counter(robot.view(), SwipeDirection::Left);

    robot.drag(SwipeDirection::Left, 90.0);
    assert!(robot
        .view()
        .indicator_state(SwipeDirection::Left)
        .is_some_and(|state| state.is_active));

    robot.release();
    assert_eq!(count.get(), 0);
    robot.settle();
    assert_eq!(count.get(), 1);
    assert!(robot.is_idle());
}

#[test]
fn every_direction_triggers_its_own_action() {
    let mut robot = PanRobot::new();
    let counts: Vec<_> = SwipeDirection::ALL
        .into_iter()
        .map(|direction| (direction, register_counter(robot.view(), direction)))
        .collect();

    for (direction, _) in &counts {
        robot.swipe(*direction, 70.0);
        robot.settle();
    }

    for (direction, count) in &counts {
        assert_eq!(count.get(), 1, "{direction} triggered once");
    }
}

#[test]
fn short_swipe_does_not_trigger() {
    let mut robot = PanRobot::new();
    let count = register_counter(robot.view(), SwipeDirection::Up);

    // The icon stays hidden until the strip outgrows it.
    for distance in [12.0, 20.0, 40.0] {
        robot.swipe(SwipeDirection::Up, distance);
        robot.settle();
        assert!(robot.view().content_offset().is_zero());
    }
    assert_eq!(count.get(), 0);
}

#[test]
fn reversing_mid_drag_triggers_the_opposite_action() {
    let mut robot = PanRobot::new();
    let left = register_counter(robot.view(), SwipeDirection::Left);
    let right = register_counter(robot.view(), SwipeDirection::Right);

    robot.press(200.0, 200.0);
    robot.move_to(180.0, 200.0).move_to(160.0, 200.0);
    assert_eq!(robot.view().committed_direction(), Some(SwipeDirection::Left));

    robot.move_to(220.0, 200.0).move_to(260.0, 200.0);
    assert_eq!(robot.view().committed_direction(), Some(SwipeDirection::Right));

    robot.release();
    robot.settle();
    assert_eq!(left.get(), 0);
    assert_eq!(right.get(), 1);
}

#[test]
fn pointer_cancel_resets_without_trigger() {
    let mut robot = PanRobot::new();
    let count = register_counter(robot.view(), SwipeDirection::Down);

    robot.drag(SwipeDirection::Down, 80.0);
    robot.cancel();
    assert!(!robot.view().is_tracking());
    robot.settle();

    assert_eq!(count.get(), 0);
    assert!(robot.view().content_offset().is_zero());
}

#[test]
fn custom_settings_change_activation_distance() {
    let settings = PanGestureSettings::default().with_minimum_translation(40.0);
    let mut robot = PanRobot::with_settings(settings);
    let count = register_counter(robot.view(), SwipeDirection::Right);

    robot.swipe(SwipeDirection::Right, 30.0);
    robot.settle();
    assert_eq!(count.get(), 0);

    robot.swipe(SwipeDirection::Right, 90.0);
    robot.settle();
    assert_eq!(count.get(), 1);
}

#[test]
fn manual_ticker_drives_updates_and_is_disarmed_on_end() {
    let clock = FrameClock::new();
    let ticker = ManualTicker::new();
    let mut view = PanGestureView::with_ticker(
        clock.clone(),
        PanGestureSettings::default(),
        Box::new(ticker.clone()),
    );
    let count = register_counter(&view, SwipeDirection::Right);

    view.handle_pan(PanEvent::began(Point::ZERO, Point::new(5.0, 0.0)));
    assert_eq!(ticker.start_count(), 1);
    view.handle_pan(PanEvent::changed(Point::new(60.0, 0.0), Point::ZERO));
    assert!(view.content_offset().is_zero());

    assert!(ticker.tick(1));
    assert_eq!(view.committed_direction(), Some(SwipeDirection::Right));
    assert!(view.content_offset().x > 44.0);

    view.handle_pan(PanEvent::ended(Point::new(60.0, 0.0), Point::ZERO));
    assert_eq!(ticker.stop_count(), 1);
    assert!(!ticker.tick(2));

    let mut robot = PanRobot::with_view(clock, view);
    robot.settle();
    assert_eq!(count.get(), 1);
}

#[test]
fn update_listener_sees_every_frame_of_a_drag() {
    let mut robot = PanRobot::new();
    let offsets = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&offsets);
    robot
        .view()
        .set_on_update(move |update| sink.borrow_mut().push(update.content_offset.x));

    robot.drag(SwipeDirection::Right, 160.0);

    let offsets = offsets.borrow();
    assert!(!offsets.is_empty());
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(offsets.iter().all(|offset| *offset < 100.0));
}
