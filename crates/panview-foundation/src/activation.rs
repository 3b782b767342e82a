//! Action indicator activation.
//!
//! An action indicator sits in the strip the content uncovers while it is
//! dragged. Its icon is centered in that strip and stays hidden until the
//! strip is wider than the icon. Once fully faded in, the indicator is active
//! and releasing the gesture triggers its action.

use crate::direction::SwipeDirection;

/// Fraction of the activation distance covered by an indicator.
///
/// `content_origin` is how far the content moved away from the indicator's
/// edge, `indicator_origin` the icon's origin inside the indicator. A value
/// of 1.0 or more means active; consumers clamp it to [0, 1] for opacity.
pub fn reveal_fraction(content_origin: f32, indicator_origin: f32, minimum_translation: f32) -> f32 {
    (content_origin + indicator_origin) / minimum_translation
}

/// Layout of one indicator for a given content offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorGeometry {
    /// Length of the uncovered strip along the drag axis.
    pub revealed_length: f32,
    /// Length of the icon along the drag axis.
    pub icon_length: f32,
    /// Origin of the icon inside the strip.
    pub icon_origin: f32,
}

impl IndicatorGeometry {
    /// Measure the indicator of `direction` when the content is displaced by
    /// `offset` along that direction's axis.
    pub fn measure(direction: SwipeDirection, offset: f32, icon_size: f32) -> Self {
        let revealed_length = (offset * direction.sign()).max(0.0);
        let icon_length = icon_size.min(revealed_length);
        let icon_origin = ((revealed_length - icon_length) / 2.0).max(0.0);
        Self {
            revealed_length,
            icon_length,
            icon_origin,
        }
    }

    /// Whether the strip is wider than the icon. A narrower strip hides the
    /// icon entirely.
    pub fn is_icon_visible(&self) -> bool {
        self.revealed_length > self.icon_length
    }

    /// Reveal fraction of the indicator, zero while the icon is hidden.
    pub fn reveal_fraction(&self, minimum_translation: f32) -> f32 {
        if !self.is_icon_visible() {
            return 0.0;
        }
        reveal_fraction(self.revealed_length, self.icon_origin, minimum_translation)
    }

    /// Icon opacity, the reveal fraction clamped to [0, 1].
    pub fn icon_opacity(&self, minimum_translation: f32) -> f32 {
        self.reveal_fraction(minimum_translation).clamp(0.0, 1.0)
    }
}

/// Activation flags of one indicator, recomputed on every update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivationState {
    pub is_active: bool,
    /// Mirrors `is_active` as of the last update; read at gesture end.
    pub should_trigger: bool,
}

impl ActivationState {
    pub fn from_fraction(fraction: f32) -> Self {
        let is_active = fraction >= 1.0;
        Self {
            is_active,
            should_trigger: is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::{ICON_SIZE, MINIMUM_TRANSLATION};

    #[test]
    fn fraction_reaches_one_at_minimum_translation() {
        let fraction = reveal_fraction(0.0, 15.0, MINIMUM_TRANSLATION);
        assert_eq!(fraction, 1.0);
        assert!(ActivationState::from_fraction(fraction).is_active);

        let fraction = reveal_fraction(0.0, 7.0, MINIMUM_TRANSLATION);
        assert!(fraction < 1.0);
        assert_eq!(
            ActivationState::from_fraction(fraction),
            ActivationState::default()
        );
    }

    #[test]
    fn geometry_only_reveals_along_direction() {
        let right = IndicatorGeometry::measure(SwipeDirection::Right, 30.0, ICON_SIZE);
        assert_eq!(right.revealed_length, 30.0);
        assert_eq!(right.icon_length, 30.0);
        assert_eq!(right.icon_origin, 0.0);
        assert_eq!(right.icon_opacity(MINIMUM_TRANSLATION), 0.0);

        let left = IndicatorGeometry::measure(SwipeDirection::Left, 30.0, ICON_SIZE);
        assert_eq!(left, IndicatorGeometry::default());
        assert_eq!(left.icon_opacity(MINIMUM_TRANSLATION), 0.0);
    }

    #[test]
    fn icon_is_centered_once_strip_is_wider() {
        let up = IndicatorGeometry::measure(SwipeDirection::Up, -64.0, ICON_SIZE);
        assert_eq!(up.revealed_length, 64.0);
        assert_eq!(up.icon_length, ICON_SIZE);
        assert_eq!(up.icon_origin, 10.0);
        assert_eq!(up.icon_opacity(MINIMUM_TRANSLATION), 1.0);
    }

    #[test]
    fn short_drag_stays_inactive() {
        for offset in [10.0, 16.0, 20.0, ICON_SIZE] {
            let geometry = IndicatorGeometry::measure(SwipeDirection::Right, offset, ICON_SIZE);
            assert!(!geometry.is_icon_visible());
            assert_eq!(geometry.reveal_fraction(MINIMUM_TRANSLATION), 0.0);
            assert_eq!(geometry.icon_opacity(MINIMUM_TRANSLATION), 0.0);
        }
    }

    #[test]
    fn strip_wider_than_icon_activates() {
        let geometry = IndicatorGeometry::measure(SwipeDirection::Down, 46.0, ICON_SIZE);
        assert!(geometry.is_icon_visible());
        assert_eq!(geometry.icon_origin, 1.0);
        let fraction = geometry.reveal_fraction(MINIMUM_TRANSLATION);
        assert_eq!(fraction, 47.0 / MINIMUM_TRANSLATION);
        assert!(ActivationState::from_fraction(fraction).should_trigger);
    }
}
