//! Pure math/data for drawing in Panview
//!
//! This crate contains the geometry primitives, color definitions and icon
//! handles shared by the gesture, animation and widget crates.

mod color;
mod geometry;
mod icon;

pub use color::*;
pub use geometry::*;
pub use icon::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
    pub use crate::icon::Icon;
}
