//! Robot-style driver for pan gesture tests.
//!
//! [`PanRobot`] owns a [`FrameClock`] and a [`PanGestureView`] and plays
//! pointer input through a [`PanRecognizer`] the way a platform would,
//! draining one frame after every pointer move.
//!
//! # Example
//!
//! ```
//! use panview_testing::PanRobot;
//! use panview_ui::SwipeDirection;
//!
//! let mut robot = PanRobot::new();
//! robot.swipe(SwipeDirection::Right, 80.0);
//! robot.settle();
//! assert!(robot.view().content_offset().is_zero());
//! ```

use panview_core::{FrameClock, FRAME_INTERVAL_NANOS};
use panview_foundation::{PanRecognizer, PointerEvent, PointerEventKind};
use panview_ui::{PanEvent, PanGestureSettings, PanGestureView, SwipeDirection};
use panview_ui_graphics::Point;

/// Frames [`PanRobot::settle`] advances before giving up.
pub const MAX_SETTLE_FRAMES: usize = 600;

/// Number of pointer moves a [`PanRobot::swipe`] is split into.
pub const SWIPE_STEPS: usize = 8;

/// Where swipes start, in view coordinates.
pub const SWIPE_ORIGIN: Point = Point::new(200.0, 200.0);

pub struct PanRobot {
    clock: FrameClock,
    view: PanGestureView,
    recognizer: PanRecognizer,
    frame: u64,
    pointer: Option<Point>,
}

impl Default for PanRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl PanRobot {
    pub fn new() -> Self {
        Self::with_settings(PanGestureSettings::default())
    }

    pub fn with_settings(settings: PanGestureSettings) -> Self {
        let clock = FrameClock::new();
        let view = PanGestureView::with_settings(clock.clone(), settings);
        Self::with_view(clock, view)
    }

    /// Drive an existing view. `clock` must be the clock the view runs on.
    pub fn with_view(clock: FrameClock, view: PanGestureView) -> Self {
        Self {
            clock,
            view,
            recognizer: PanRecognizer::new(),
            frame: 0,
            pointer: None,
        }
    }

    pub fn view(&self) -> &PanGestureView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PanGestureView {
        &mut self.view
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Frames drained so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame * FRAME_INTERVAL_NANOS
    }

    fn time_millis(frame: u64) -> i64 {
        (frame * FRAME_INTERVAL_NANOS / 1_000_000) as i64
    }

    /// Drain the next frame, returning how many callbacks ran.
    pub fn advance_frame(&mut self) -> usize {
        self.frame += 1;
        self.clock.drain_frame_callbacks(self.frame_time_nanos())
    }

    pub fn advance_frames(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.advance_frame();
        }
        self
    }

    /// Advance frames until nothing is scheduled on the clock. Returns the
    /// number of frames advanced.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.clock.has_frame_callbacks() {
            if frames == MAX_SETTLE_FRAMES {
                log::warn!("still busy after {MAX_SETTLE_FRAMES} frames");
                break;
            }
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Whether the view is at rest with nothing scheduled.
    pub fn is_idle(&self) -> bool {
        !self.clock.has_frame_callbacks() && !self.view.is_dragging()
    }

    /// Feed a pan event straight to the view, bypassing the recognizer.
    pub fn pan(&mut self, event: PanEvent) -> &mut Self {
        self.view.handle_pan(event);
        self
    }

    fn pointer_event(&mut self, kind: PointerEventKind, position: Point, frame: u64) {
        let event = PointerEvent::new(kind, position, Self::time_millis(frame));
        if let Some(pan) = self.recognizer.handle(&event) {
            log::trace!("robot {:?} -> {:?}", kind, pan.phase);
            self.view.handle_pan(pan);
        }
    }

    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        let position = Point::new(x, y);
        self.pointer = Some(position);
        self.pointer_event(PointerEventKind::Down, position, self.frame);
        self
    }

    /// Move the pressed pointer just before the next frame, then drain that
    /// frame.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let position = Point::new(x, y);
        if self.pointer.is_none() {
            log::warn!("robot moved without a pressed pointer");
        }
        self.pointer = Some(position);
        self.pointer_event(PointerEventKind::Move, position, self.frame + 1);
        self.advance_frame();
        self
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        let from = self.pointer.unwrap_or(SWIPE_ORIGIN);
        self.move_to(from.x + dx, from.y + dy)
    }

    pub fn release(&mut self) -> &mut Self {
        let position = self.pointer.take().unwrap_or(SWIPE_ORIGIN);
        self.pointer_event(PointerEventKind::Up, position, self.frame);
        self
    }

    /// The platform took the pointer away.
    pub fn cancel(&mut self) -> &mut Self {
        let position = self.pointer.take().unwrap_or(SWIPE_ORIGIN);
        self.pointer_event(PointerEventKind::Cancel, position, self.frame);
        self
    }

    /// Press at [`SWIPE_ORIGIN`] and drag `distance` towards `direction`
    /// without releasing.
    pub fn drag(&mut self, direction: SwipeDirection, distance: f32) -> &mut Self {
        self.press(SWIPE_ORIGIN.x, SWIPE_ORIGIN.y);
        let step = direction.sign() * distance / SWIPE_STEPS as f32;
        let delta = direction.axis().vector(step);
        for _ in 0..SWIPE_STEPS {
            self.move_by(delta.x, delta.y);
        }
        self
    }

    /// Drag `distance` towards `direction` and release.
    pub fn swipe(&mut self, direction: SwipeDirection, distance: f32) -> &mut Self {
        self.drag(direction, distance).release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_moves_content_and_settles_back() {
        let mut robot = PanRobot::new();
        robot.drag(SwipeDirection::Down, 40.0);

        assert_eq!(robot.view().committed_direction(), Some(SwipeDirection::Down));
        assert_eq!(robot.view().content_offset(), Point::new(0.0, 40.0));

        robot.release();
        let frames = robot.settle();
        assert!(frames > 0);
        assert!(robot.is_idle());
        assert!(robot.view().content_offset().is_zero());
    }

    #[test]
    fn touch_slop_delays_the_pan() {
        let mut robot = PanRobot::new();
        robot.press(10.0, 10.0).move_to(14.0, 10.0);
        assert!(!robot.view().is_dragging());

        robot.move_to(30.0, 10.0);
        assert!(robot.view().is_dragging());
        assert_eq!(robot.view().committed_direction(), Some(SwipeDirection::Right));
        assert_eq!(robot.view().content_offset(), Point::new(20.0, 0.0));
    }

    #[test]
    fn frames_advance_clock_time() {
        let mut robot = PanRobot::new();
        robot.advance_frames(3);
        assert_eq!(robot.frame_count(), 3);
        assert_eq!(robot.clock().last_frame_nanos(), Some(3 * FRAME_INTERVAL_NANOS));
    }
}
