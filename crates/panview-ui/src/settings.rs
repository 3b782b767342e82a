use panview_animation::{AnimationSpec, Easing, SpringSpec};
use panview_foundation::gesture_constants::{
    FULL_LIMIT, ICON_SIZE, LINEAR_LIMIT, MINIMUM_TRANSLATION,
};
use panview_foundation::ElasticLimits;

/// Configuration of a [`PanGestureView`](crate::PanGestureView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGestureSettings {
    /// Limits of the elastic drag mapping.
    pub elastic: ElasticLimits,
    /// Reveal distance an indicator needs before it activates.
    pub minimum_translation: f32,
    /// Icon length along the drag axis.
    pub icon_size: f32,
    /// Icon scale of the active indicator.
    pub active_icon_scale: f32,
    /// Animation of the indicator icon scale.
    pub indicator_animation: AnimationSpec,
    /// Settle animation back to rest when nothing triggers.
    pub settle_animation: AnimationSpec,
    /// Settle animation back to rest before an action triggers.
    pub trigger_spring: SpringSpec,
}

impl Default for PanGestureSettings {
    fn default() -> Self {
        Self {
            elastic: ElasticLimits::new(LINEAR_LIMIT, FULL_LIMIT),
            minimum_translation: MINIMUM_TRANSLATION,
            icon_size: ICON_SIZE,
            active_icon_scale: 1.2,
            indicator_animation: AnimationSpec::tween(400, Easing::EaseInOut),
            settle_animation: AnimationSpec::tween(300, Easing::EaseOut),
            trigger_spring: SpringSpec::default_spring()
                .with_damping_ratio(0.6)
                .with_initial_velocity(1.0),
        }
    }
}

impl PanGestureSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elastic_limits(mut self, linear: f32, full: f32) -> Self {
        self.elastic = ElasticLimits::new(linear, full);
        self
    }

    pub fn with_minimum_translation(mut self, minimum_translation: f32) -> Self {
        self.minimum_translation = minimum_translation;
        self
    }

    pub fn with_icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn with_active_icon_scale(mut self, scale: f32) -> Self {
        self.active_icon_scale = scale;
        self
    }

    pub fn with_indicator_animation(mut self, animation: AnimationSpec) -> Self {
        self.indicator_animation = animation;
        self
    }

    pub fn with_settle_animation(mut self, animation: AnimationSpec) -> Self {
        self.settle_animation = animation;
        self
    }

    pub fn with_trigger_spring(mut self, spring: SpringSpec) -> Self {
        self.trigger_spring = spring;
        self
    }
}
