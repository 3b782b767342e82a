//! Directional pan gesture view.
//!
//! [`PanGestureView`] interprets a pan gesture as a swipe in one of four
//! directions, moves its content along that axis with an elastic drag and
//! fires the action registered for the direction once the gesture ends past
//! the activation threshold and the content settled back to rest.

mod action;
mod indicator;
mod pan_gesture_view;
mod settings;

pub use action::{ActionError, ActionRegistry, PanGestureAction, TriggerCallback};
pub use indicator::IndicatorState;
pub use pan_gesture_view::{PanGestureView, PanUpdate};
pub use settings::PanGestureSettings;

pub use panview_foundation::{PanEvent, PanPhase, SwipeDirection};

pub mod prelude {
    pub use crate::action::{ActionError, PanGestureAction};
    pub use crate::indicator::IndicatorState;
    pub use crate::pan_gesture_view::{PanGestureView, PanUpdate};
    pub use crate::settings::PanGestureSettings;
    pub use panview_foundation::{PanEvent, PanPhase, SwipeDirection};
}
