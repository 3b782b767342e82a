//! Per-direction action indicators.

use panview_animation::{Animatable, AnimationType};
use panview_core::FrameClock;
use panview_foundation::{ActivationState, IndicatorGeometry, SwipeDirection};

use crate::settings::PanGestureSettings;

/// Snapshot of an indicator for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    pub direction: SwipeDirection,
    /// Whether the indicator was revealed enough on the last update.
    pub is_active: bool,
    /// Whether ending the gesture now triggers the action.
    pub should_trigger: bool,
    /// Unclamped reveal fraction for the current content offset.
    pub reveal_fraction: f32,
    pub icon_opacity: f32,
    pub icon_scale: f32,
    /// Length of the strip the content uncovers.
    pub revealed_length: f32,
}

/// Indicator of one registered action.
///
/// Activation flags are recomputed by every frame update. Geometry derived
/// values are computed on demand from the current content offset so they
/// follow the settle animation too.
pub(crate) struct ActionIndicator {
    direction: SwipeDirection,
    activation: ActivationState,
    scale: Animatable<f32>,
}

impl ActionIndicator {
    pub(crate) fn new(direction: SwipeDirection, clock: FrameClock) -> Self {
        Self {
            direction,
            activation: ActivationState::default(),
            scale: Animatable::new(1.0, clock),
        }
    }

    pub(crate) fn activation(&self) -> ActivationState {
        self.activation
    }

    pub(crate) fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Recompute activation for a content `offset` along this indicator's
    /// axis. Only the indicator of the committed direction may trigger or
    /// grow its icon.
    pub(crate) fn update(&mut self, offset: f32, committed: bool, settings: &PanGestureSettings) {
        let fraction = IndicatorGeometry::measure(self.direction, offset, settings.icon_size)
            .reveal_fraction(settings.minimum_translation);
        let mut activation = ActivationState::from_fraction(fraction);
        if !committed {
            activation.should_trigger = false;
        } else if activation.is_active != self.activation.is_active {
            log::trace!(
                "indicator {} {}",
                self.direction,
                if activation.is_active { "activated" } else { "deactivated" }
            );
        }
        self.activation = activation;

        let scale = if committed && activation.is_active {
            settings.active_icon_scale
        } else {
            1.0
        };
        self.animate_scale(scale, settings);
    }

    /// Forget activation and shrink the icon back.
    pub(crate) fn reset(&mut self, settings: &PanGestureSettings) {
        self.activation = ActivationState::default();
        self.animate_scale(1.0, settings);
    }

    fn animate_scale(&self, target: f32, settings: &PanGestureSettings) {
        if self.scale.target() != target {
            self.scale
                .animate_to(target, AnimationType::Tween(settings.indicator_animation));
        }
    }

    pub(crate) fn state(&self, offset: f32, settings: &PanGestureSettings) -> IndicatorState {
        let geometry = IndicatorGeometry::measure(self.direction, offset, settings.icon_size);
        IndicatorState {
            direction: self.direction,
            is_active: self.activation.is_active,
            should_trigger: self.activation.should_trigger,
            reveal_fraction: geometry.reveal_fraction(settings.minimum_translation),
            icon_opacity: geometry.icon_opacity(settings.minimum_translation),
            icon_scale: self.scale.value(),
            revealed_length: geometry.revealed_length,
        }
    }
}
