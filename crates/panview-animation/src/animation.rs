//! Time-based and spring animations driven by a [`FrameClock`].

use std::cell::RefCell;
use std::rc::Rc;

use panview_core::{FrameCallbackRegistration, FrameClock};

/// Values an [`Animatable`] can drive.
pub trait Animate: Clone {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;

    /// Scalar projection used to measure spring progress.
    fn magnitude(&self) -> f32;
}

impl Animate for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }

    fn magnitude(&self) -> f32 {
        *self
    }
}

/// Easing curves, each a CSS style cubic bezier through (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map a linear fraction in [0, 1] onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
        }
    }
}

/// Bezier with control points (x1, y1) and (x2, y2), in polynomial form.
struct CubicBezier {
    x: [f32; 3],
    y: [f32; 3],
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1, x2),
            y: Self::coefficients(y1, y2),
        }
    }

    fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        [a, b, c]
    }

    fn sample([a, b, c]: [f32; 3], t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    /// The y value at the parameter whose x equals `fraction`.
    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        // x(t) is monotonic for control points with x in [0, 1].
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = fraction;
        for _ in 0..24 {
            let x = Self::sample(self.x, t);
            if (x - fraction).abs() < 1e-6 {
                break;
            }
            if x > fraction {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        Self::sample(self.y, t)
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::EaseOut)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Starting velocity, in animated distances per second.
    pub initial_velocity: f32,
    /// Velocity threshold to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            initial_velocity: 0.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f32) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// The animation reached its target.
    Finished,
    /// The animation was retargeted, snapped or stopped before reaching its
    /// target.
    Interrupted,
}

impl AnimationEndReason {
    pub fn is_finished(self) -> bool {
        self == AnimationEndReason::Finished
    }
}

type EndCallback = Box<dyn FnOnce(AnimationEndReason)>;

/// Generic animatable value holder.
pub struct Animatable<T: Animate + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Animate + 'static> {
    clock: FrameClock,
    current: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl<T: Animate + 'static> AnimatableInner<T> {
    /// Stop the running animation, returning its completion callback.
    fn interrupt(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.on_end.take()
    }

    fn settle(&mut self) -> Option<EndCallback> {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
        self.running = false;
        self.on_end.take()
    }
}

impl<T: Animate + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
            registration: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value using the specified animation.
    pub fn animate_to(&self, target: T, animation: AnimationType) {
        self.start_animation(target, animation, None);
    }

    /// Animate to the target value and report how the animation ended.
    ///
    /// `on_end` receives [`AnimationEndReason::Finished`] only when the
    /// target was reached; being retargeted, snapped or stopped reports
    /// [`AnimationEndReason::Interrupted`].
    pub fn animate_to_with_completion(
        &self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce(AnimationEndReason) + 'static,
    ) {
        self.start_animation(target, animation, Some(Box::new(on_end)));
    }

    fn start_animation(&self, target: T, animation: AnimationType, on_end: Option<EndCallback>) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();

            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.velocity = match animation {
                AnimationType::Spring(spec) => spec.initial_velocity,
                AnimationType::Tween(_) => 0.0,
            };
            inner.running = true;
            inner.on_end = on_end;
            interrupted
        };

        if let Some(callback) = interrupted {
            callback(AnimationEndReason::Interrupted);
        }

        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.current = target.clone();
            inner.start = target.clone();
            inner.target = target;
            inner.velocity = 0.0;
            interrupted
        };

        if let Some(callback) = interrupted {
            callback(AnimationEndReason::Interrupted);
        }
    }

    /// Stop any running animation at its current value.
    pub fn stop(&self) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            if !inner.running {
                return;
            }
            let interrupted = inner.interrupt();
            inner.target = inner.current.clone();
            inner.start = inner.current.clone();
            inner.velocity = 0.0;
            interrupted
        };

        if let Some(callback) = interrupted {
            callback(AnimationEndReason::Interrupted);
        }
    }

    /// Current animated value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let step = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }
            match inner.animation_type {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            }
        };

        match step {
            FrameStep::Continue => Self::schedule_frame(this),
            FrameStep::Done(on_end) => {
                log::trace!("animation settled at frame {frame_time_nanos}");
                if let Some(on_end) = on_end {
                    on_end(AnimationEndReason::Finished);
                }
            }
        }
    }
}

enum FrameStep {
    Continue,
    Done(Option<EndCallback>),
}

/// Longest interval the spring integrator advances in one step.
const SPRING_STEP_SECONDS: f32 = 0.016;

impl<T: Animate + 'static> AnimatableInner<T> {
    fn progress(&self) -> f32 {
        let span = self.target.magnitude() - self.start.magnitude();
        if span.abs() < f32::EPSILON {
            1.0
        } else {
            (self.current.magnitude() - self.start.magnitude()) / span
        }
    }

    fn step_tween(&mut self, spec: AnimationSpec, now: u64) -> FrameStep {
        let started = *self.start_time_nanos.get_or_insert(now);
        let Some(elapsed) = now
            .saturating_sub(started)
            .checked_sub(spec.delay_millis * 1_000_000)
        else {
            return FrameStep::Continue;
        };

        let duration = (spec.duration_millis * 1_000_000).max(1);
        let linear = (elapsed as f32 / duration as f32).min(1.0);
        self.current = self.start.lerp(&self.target, spec.easing.transform(linear));
        if linear < 1.0 {
            FrameStep::Continue
        } else {
            FrameStep::Done(self.settle())
        }
    }

    /// Damped harmonic oscillator over progress, integrated with
    /// semi-implicit Euler.
    fn step_spring(&mut self, spec: SpringSpec, now: u64) -> FrameStep {
        self.start_time_nanos.get_or_insert(now);
        let Some(previous) = self.last_frame_nanos.replace(now) else {
            return FrameStep::Continue;
        };
        let mut remaining = now.saturating_sub(previous) as f32 / 1e9;
        if remaining <= 0.0 {
            return FrameStep::Continue;
        }

        let damping = 2.0 * spec.damping_ratio * spec.stiffness.sqrt();
        while remaining > 0.0 {
            let dt = remaining.min(SPRING_STEP_SECONDS);
            let progress = self.progress();
            let acceleration = -spec.stiffness * (progress - 1.0) - damping * self.velocity;
            self.velocity += acceleration * dt;
            let next = (progress + self.velocity * dt).clamp(-1.0, 2.0);
            self.current = self.start.lerp(&self.target, next);
            remaining -= dt;
        }

        let distance = (self.current.magnitude() - self.target.magnitude()).abs();
        if self.velocity.abs() < spec.velocity_threshold && distance < spec.position_threshold {
            FrameStep::Done(self.settle())
        } else {
            FrameStep::Continue
        }
    }
}

impl<T: Animate + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
