pub mod gestures;
pub mod types;

pub use types::{PanEvent, PanPhase, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::gestures::PanRecognizer;
    pub use super::types::{PanEvent, PanPhase, PointerEvent, PointerEventKind, PointerId};
}
