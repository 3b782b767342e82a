//! Velocity tracking for pan gestures.
//!
//! Weighted least-squares regression over a short history window, weighting
//! recent samples more.

use std::collections::VecDeque;

use panview_ui_graphics::Point;

/// Samples kept per axis.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
const HORIZON_MS: i64 = 100;

/// A window longer than this with almost no travel means the pointer rested.
const ASSUME_STOPPED_MS: i64 = 40;

/// Travel, in pixels, below which a long window counts as resting.
const MIN_MOVEMENT_THRESHOLD: f32 = 2.0;

/// Per-sample weight decay, newest first.
const RECENCY_DECAY: f32 = 0.95;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Running sums for a weighted least-squares line `value = a + b * t`.
#[derive(Default)]
struct WeightedFit {
    weight: f32,
    t: f32,
    value: f32,
    tt: f32,
    tv: f32,
}

impl WeightedFit {
    fn add(&mut self, t: f32, value: f32, weight: f32) {
        self.weight += weight;
        self.t += weight * t;
        self.value += weight * value;
        self.tt += weight * t * t;
        self.tv += weight * t * value;
    }

    fn slope(&self) -> f32 {
        let denominator = self.weight * self.tt - self.t * self.t;
        if denominator.abs() < f32::EPSILON {
            0.0
        } else {
            (self.weight * self.tv - self.t * self.value) / denominator
        }
    }
}

/// 1D velocity tracker over absolute positions.
///
/// ```
/// use panview_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(0, 0.0);
/// tracker.add_data_point(10, 10.0);
/// tracker.add_data_point(20, 20.0);
/// assert!((tracker.calculate_velocity() - 1000.0).abs() < 1.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<Sample>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, value });
    }

    /// Velocity in units per second.
    ///
    /// Zero with fewer than two recent samples or when the pointer has
    /// stopped moving.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(&newest) = self.samples.back() else {
            return 0.0;
        };

        let mut fit = WeightedFit::default();
        let mut weight = 1.0;
        let mut oldest = newest;
        let mut count = 0;
        for sample in self.samples.iter().rev() {
            let age = newest.time_ms - sample.time_ms;
            if !(0..=HORIZON_MS).contains(&age) {
                break;
            }
            fit.add(-(age as f32), sample.value, weight);
            weight *= RECENCY_DECAY;
            oldest = *sample;
            count += 1;
        }

        if count < 2 {
            return 0.0;
        }
        let travel = (newest.value - oldest.value).abs();
        if newest.time_ms - oldest.time_ms > ASSUME_STOPPED_MS && travel < MIN_MOVEMENT_THRESHOLD {
            return 0.0;
        }

        fit.slope() * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// Two-axis velocity tracker.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Velocity in pixels per second.
    pub fn velocity(&self) -> Point {
        Point::new(self.x.calculate_velocity(), self.y.calculate_velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
