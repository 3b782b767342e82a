//! Animation system for Panview
//!
//! Provides frame-clock driven animations with easing curves and spring
//! physics, and completion callbacks that tell finished animations apart
//! from interrupted ones.

mod animation;

pub use animation::*;
