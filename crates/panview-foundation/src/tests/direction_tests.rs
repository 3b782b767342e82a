use super::*;

#[test]
fn zero_velocity_resolves_to_none() {
    for translation in [Point::ZERO, Point::new(30.0, 0.0), Point::new(-5.0, 80.0)] {
        assert_eq!(
            resolve_direction(translation, Point::ZERO),
            SwipeDirection::None
        );
    }
}

#[test]
fn horizontal_velocity_dominates() {
    let velocity = Point::new(5.0, -2.0);
    assert_eq!(
        resolve_direction(Point::new(3.0, -1.0), velocity),
        SwipeDirection::Right
    );
    assert_eq!(
        resolve_direction(Point::new(-3.0, -1.0), velocity),
        SwipeDirection::Left
    );
    // No horizontal translation yet: not positive, so left.
    assert_eq!(
        resolve_direction(Point::ZERO, Point::new(5.0, 0.0)),
        SwipeDirection::Left
    );
}

#[test]
fn vertical_velocity_and_ties_pick_vertical_axis() {
    assert_eq!(
        resolve_direction(Point::new(0.0, 4.0), Point::new(1.0, 6.0)),
        SwipeDirection::Down
    );
    assert_eq!(
        resolve_direction(Point::new(0.0, -4.0), Point::new(3.0, -3.0)),
        SwipeDirection::Up
    );
    assert_eq!(
        resolve_direction(Point::ZERO, Point::new(0.0, 2.0)),
        SwipeDirection::Up
    );
}

#[test]
fn inversion_checks_sign_along_axis() {
    assert!(SwipeDirection::Left.was_inverted(Point::new(1.0, 0.0)));
    assert!(!SwipeDirection::Left.was_inverted(Point::new(-1.0, 50.0)));
    assert!(SwipeDirection::Right.was_inverted(Point::new(-0.5, 0.0)));
    assert!(SwipeDirection::Up.was_inverted(Point::new(0.0, 2.0)));
    assert!(SwipeDirection::Down.was_inverted(Point::new(0.0, -2.0)));
    assert!(!SwipeDirection::Down.was_inverted(Point::new(-90.0, 0.0)));
    assert!(!SwipeDirection::None.was_inverted(Point::new(-9.0, 9.0)));
}

#[test]
fn inversion_flips_once_then_holds() {
    let mut direction = SwipeDirection::Left;

    direction = direction.invert_if_required(Point::new(12.0, 0.0));
    assert_eq!(direction, SwipeDirection::Right);

    direction = direction.invert_if_required(Point::new(20.0, 0.0));
    assert_eq!(direction, SwipeDirection::Right);
}

#[test]
fn inversion_never_changes_axis() {
    for direction in SwipeDirection::ALL {
        for translation in [
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
            Point::new(10.0, -10.0),
            Point::new(-10.0, -10.0),
        ] {
            let inverted = direction.invert_if_required(translation);
            assert_eq!(inverted.axis(), direction.axis());
        }
    }
}

#[test]
fn opposites_pair_up() {
    for direction in SwipeDirection::ALL {
        assert_ne!(direction.opposite(), direction);
        assert_eq!(direction.opposite().opposite(), direction);
        assert_eq!(direction.opposite().sign(), -direction.sign());
    }
    assert_eq!(SwipeDirection::None.opposite(), SwipeDirection::None);
}

#[test]
fn indices_are_unique() {
    let mut seen = [false; 4];
    for direction in SwipeDirection::ALL {
        let index = direction.index().expect("real direction has a slot");
        assert!(!seen[index]);
        seen[index] = true;
    }
    assert_eq!(SwipeDirection::None.index(), None);
}

#[test]
fn display_uses_lowercase_names() {
    assert_eq!(SwipeDirection::Right.to_string(), "right");
    assert_eq!(SwipeDirection::None.to_string(), "none");
}

#[test]
fn axis_projects_points() {
    let point = Point::new(3.0, -7.0);
    assert_eq!(Axis::Horizontal.component(point), 3.0);
    assert_eq!(Axis::Vertical.component(point), -7.0);
    assert_eq!(Axis::Vertical.vector(5.0), Point::new(0.0, 5.0));
    assert_eq!(SwipeDirection::None.axis(), Axis::Vertical);
}
