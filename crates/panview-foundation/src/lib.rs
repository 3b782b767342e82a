//! Gesture foundation for Panview.
//!
//! Pure, allocation-free building blocks of the pan gesture widget: swipe
//! directions and their inversion, the elastic drag mapping, indicator
//! activation math, and the pointer plumbing that turns raw touches into a
//! pan event stream.

pub mod activation;
pub mod direction;
pub mod elastic;
pub mod gesture_constants;
pub mod nodes;
pub mod velocity_tracker;

pub use activation::{reveal_fraction, ActivationState, IndicatorGeometry};
pub use direction::{resolve_direction, Axis, SwipeDirection};
pub use elastic::{elastic, ElasticLimits};
pub use nodes::input::gestures::PanRecognizer;
pub use nodes::input::{PanEvent, PanPhase, PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::activation::{reveal_fraction, ActivationState, IndicatorGeometry};
    pub use crate::direction::{resolve_direction, Axis, SwipeDirection};
    pub use crate::elastic::{elastic, ElasticLimits};
    pub use crate::nodes::input::prelude::*;
}
