//! Swipe directions.

use std::fmt;

use panview_ui_graphics::Point;

/// Direction of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// No direction could be resolved, the gesture had no velocity.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Axis the content moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `point` along this axis.
    pub fn component(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Vector of length `value` along this axis.
    pub fn vector(self, value: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(value, 0.0),
            Axis::Vertical => Point::new(0.0, value),
        }
    }
}

impl SwipeDirection {
    /// The four directions an action can be registered for.
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    pub fn is_none(self) -> bool {
        self == SwipeDirection::None
    }

    /// Axis the content moves along; anything not horizontal is vertical.
    pub fn axis(self) -> Axis {
        if self.is_horizontal() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// +1 for directions along the positive axis, -1 against it.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Right | SwipeDirection::Down => 1.0,
            SwipeDirection::Left | SwipeDirection::Up => -1.0,
            SwipeDirection::None => 0.0,
        }
    }

    /// The reverse direction. `None` has no opposite and maps to itself.
    pub fn opposite(self) -> SwipeDirection {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
            SwipeDirection::Up => SwipeDirection::Down,
            SwipeDirection::Down => SwipeDirection::Up,
            SwipeDirection::None => SwipeDirection::None,
        }
    }

    /// Whether `translation` points against this direction.
    pub fn was_inverted(self, translation: Point) -> bool {
        match self {
            SwipeDirection::Left => translation.x > 0.0,
            SwipeDirection::Right => translation.x < 0.0,
            SwipeDirection::Up => translation.y > 0.0,
            SwipeDirection::Down => translation.y < 0.0,
            SwipeDirection::None => false,
        }
    }

    /// This direction, or its opposite if `translation` points against it.
    pub fn invert_if_required(self, translation: Point) -> SwipeDirection {
        if self.was_inverted(translation) {
            self.opposite()
        } else {
            self
        }
    }

    /// Index into direction-keyed storage; `None` has no slot.
    pub fn index(self) -> Option<usize> {
        match self {
            SwipeDirection::Up => Some(0),
            SwipeDirection::Down => Some(1),
            SwipeDirection::Left => Some(2),
            SwipeDirection::Right => Some(3),
            SwipeDirection::None => None,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwipeDirection::None => "none",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        };
        f.write_str(name)
    }
}

/// Resolve the direction of a gesture from its first sample.
///
/// The dominant velocity component picks the axis, the translation sign picks
/// the side. Ties go to the vertical axis.
pub fn resolve_direction(translation: Point, velocity: Point) -> SwipeDirection {
    if velocity.x == 0.0 && velocity.y == 0.0 {
        return SwipeDirection::None;
    }

    if velocity.x.abs() > velocity.y.abs() {
        if translation.x > 0.0 {
            return SwipeDirection::Right;
        }
        return SwipeDirection::Left;
    }

    if translation.y > 0.0 {
        return SwipeDirection::Down;
    }

    SwipeDirection::Up
}

#[cfg(test)]
#[path = "tests/direction_tests.rs"]
mod tests;
