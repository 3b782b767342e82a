//! Elastic drag mapping.
//!
//! Drags shorter than the linear limit move the content one to one. Past it,
//! the displacement is compressed along an arctangent curve whose asymptote
//! is the full limit, which gives the rubber-band feel.

use std::f32::consts::PI;

use crate::gesture_constants::{FULL_LIMIT, LINEAR_LIMIT};

/// Map a drag distance `x` to a content displacement.
///
/// Odd-symmetric in `x`. Identity for `|x| < li`, strictly below `lf` in
/// magnitude otherwise, and continuous at `|x| == li`. With the default
/// limits, `f32` rounding makes drags beyond roughly 1e9 saturate at
/// exactly `lf`, so the result never exceeds `lf`.
pub fn elastic(x: f32, li: f32, lf: f32) -> f32 {
    if x.abs() >= li.abs() {
        (((PI * li) / (2.0 * lf)).tan() * (x / li)).atan() * (2.0 * lf / PI)
    } else {
        x
    }
}

/// Linear and full limits of the elastic mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticLimits {
    pub linear: f32,
    pub full: f32,
}

impl ElasticLimits {
    pub const fn new(linear: f32, full: f32) -> Self {
        Self { linear, full }
    }

    pub fn apply(&self, x: f32) -> f32 {
        elastic(x, self.linear, self.full)
    }
}

impl Default for ElasticLimits {
    fn default() -> Self {
        Self::new(LINEAR_LIMIT, FULL_LIMIT)
    }
}

#[cfg(test)]
#[path = "tests/elastic_tests.rs"]
mod tests;
