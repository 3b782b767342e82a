use panview_ui::{PanGestureSettings, SwipeDirection};
use panview_ui_graphics::{Color, Size};

/// Look of the action revealed for one direction.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionStyle {
    pub direction: SwipeDirection,
    pub color: Color,
    pub icon: &'static str,
}

/// Configuration for the demo screen.
#[derive(Clone, Debug)]
pub struct DemoSettings {
    pub gesture: PanGestureSettings,
    /// Size of the round container in the middle of the screen.
    pub container_size: Size,
    pub idle_label: String,
    pub idle_background: Color,
    pub idle_label_color: Color,
    pub triggered_label_color: Color,
    /// Duration of the container recolor after a trigger.
    pub recolor_millis: u64,
    /// Pointer moves a scripted swipe is split into.
    pub swipe_steps: usize,
    pub actions: Vec<ActionStyle>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            gesture: PanGestureSettings::default(),
            container_size: Size::new(200.0, 200.0),
            idle_label: "Pan Anywhere".into(),
            idle_background: Color::gray(0.9),
            idle_label_color: Color::BLACK,
            triggered_label_color: Color::WHITE,
            recolor_millis: 400,
            swipe_steps: 8,
            actions: vec![
                ActionStyle {
                    direction: SwipeDirection::Right,
                    color: Color::rgb(0.25, 0.74, 0.55),
                    icon: "chevron-left",
                },
                ActionStyle {
                    direction: SwipeDirection::Left,
                    color: Color::rgb(0.31, 0.59, 0.70),
                    icon: "chevron-right",
                },
                ActionStyle {
                    direction: SwipeDirection::Up,
                    color: Color::rgb(0.57, 0.56, 0.95),
                    icon: "chevron-down",
                },
                ActionStyle {
                    direction: SwipeDirection::Down,
                    color: Color::rgb(0.96, 0.70, 0.31),
                    icon: "chevron-up",
                },
            ],
        }
    }
}

impl DemoSettings {
    pub fn with_gesture(mut self, gesture: PanGestureSettings) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_idle_label(mut self, label: impl Into<String>) -> Self {
        self.idle_label = label.into();
        self
    }

    pub fn with_swipe_steps(mut self, steps: usize) -> Self {
        self.swipe_steps = steps.max(1);
        self
    }

    pub fn style(&self, direction: SwipeDirection) -> Option<&ActionStyle> {
        self.actions
            .iter()
            .find(|style| style.direction == direction)
    }
}
