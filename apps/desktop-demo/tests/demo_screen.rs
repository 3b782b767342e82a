use panview_demo::{parse_script, DemoScreen, DemoSettings, DemoStep};
use panview_ui::{PanGestureSettings, SwipeDirection};
use panview_ui_graphics::{Color, Point};

fn close(a: Color, b: Color) -> bool {
    a.components()
        .iter()
        .zip(b.components())
        .all(|(x, y)| (x - y).abs() < 1e-4)
}

fn step(direction: SwipeDirection, distance: f32) -> DemoStep {
    DemoStep {
        direction,
        distance,
    }
}

#[test]
fn screen_starts_idle() {
    let screen = DemoScreen::new(DemoSettings::default()).expect("demo screen");
    assert_eq!(screen.label(), "Pan Anywhere");
    assert_eq!(screen.label_color(), Color::BLACK);
    assert!(close(screen.background(), Color::gray(0.9)));
    assert_eq!(screen.container_center(), Point::new(100.0, 100.0));
    assert_eq!(screen.view().registered_directions().len(), 4);
}

#[test]
fn long_swipe_recolors_the_container() {
    let mut screen = DemoScreen::new(DemoSettings::default()).expect("demo screen");
    let report = screen.play(step(SwipeDirection::Up, 90.0));

    assert_eq!(report.committed, Some(SwipeDirection::Up));
    assert_eq!(report.triggered, Some(SwipeDirection::Up));
    assert_eq!(screen.label(), "Panned up");
    assert_eq!(screen.label_color(), Color::WHITE);
    assert!(close(screen.background(), Color::rgb(0.57, 0.56, 0.95)));
    assert_eq!(screen.container_center(), Point::new(100.0, 100.0));
}

#[test]
fn short_swipe_keeps_the_previous_state() {
    let mut screen = DemoScreen::new(DemoSettings::default()).expect("demo screen");
    screen.play(step(SwipeDirection::Right, 90.0));

    let report = screen.play(step(SwipeDirection::Left, 10.0));
    assert_eq!(report.triggered, None);
    assert_eq!(screen.label(), "Panned right");
    assert!(close(screen.background(), Color::rgb(0.25, 0.74, 0.55)));
}

#[test]
fn default_script_ends_on_the_last_direction() {
    let mut screen = DemoScreen::new(DemoSettings::default()).expect("demo screen");
    let steps = parse_script(panview_demo::DEFAULT_SCRIPT.split_whitespace()).expect("script");

    let triggered: Vec<_> = steps
        .into_iter()
        .map(|step| screen.play(step).triggered)
        .collect();

    assert_eq!(
        triggered,
        vec![
            Some(SwipeDirection::Right),
            None,
            Some(SwipeDirection::Left),
            Some(SwipeDirection::Up),
            Some(SwipeDirection::Down),
        ]
    );
    assert_eq!(screen.label(), "Panned down");
}

#[test]
fn settings_builders_shape_the_screen() {
    let gesture = PanGestureSettings::default().with_minimum_translation(200.0);
    let settings = DemoSettings::default()
        .with_gesture(gesture)
        .with_idle_label("Swipe me")
        .with_swipe_steps(0);
    assert_eq!(settings.swipe_steps, 1);
    assert_eq!(
        settings.style(SwipeDirection::Left).map(|style| style.icon),
        Some("chevron-right")
    );
    assert!(settings.style(SwipeDirection::None).is_none());

    let mut screen = DemoScreen::new(settings).expect("demo screen");
    assert_eq!(screen.label(), "Swipe me");
    let report = screen.play(step(SwipeDirection::Up, 90.0));
    assert_eq!(report.committed, Some(SwipeDirection::Up));
    assert_eq!(report.triggered, None);
    assert_eq!(screen.label(), "Swipe me");
}
