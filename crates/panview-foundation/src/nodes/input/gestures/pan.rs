//! Pan gesture recogniser.
//!
//! Turns the raw pointer stream of a single touch into pan events. The pan
//! begins once the pointer moved further than the touch slop from where it
//! went down; translations are measured from that down position.

use panview_ui_graphics::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::nodes::input::types::{PanEvent, PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecognizerState {
    Idle,
    /// Pointer is down but has not left the touch slop yet.
    Possible,
    Panning,
}

#[derive(Debug)]
pub struct PanRecognizer {
    state: RecognizerState,
    pointer: Option<PointerId>,
    origin: Point,
    last_translation: Point,
    velocity: VelocityTracker,
    touch_slop: f32,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            state: RecognizerState::Idle,
            pointer: None,
            origin: Point::ZERO,
            last_translation: Point::ZERO,
            velocity: VelocityTracker::new(),
            touch_slop,
        }
    }

    /// Whether a pan is in progress.
    pub fn is_panning(&self) -> bool {
        self.state == RecognizerState::Panning
    }

    /// Feed one pointer event, returning the pan event it produced, if any.
    ///
    /// Only the first pointer that went down is tracked; other pointers are
    /// ignored until it is lifted.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        if event.kind == PointerEventKind::Down {
            if self.pointer.is_some() {
                log::trace!("ignoring second pointer {}", event.id);
                return None;
            }
            self.pointer = Some(event.id);
            self.origin = event.position;
            self.last_translation = Point::ZERO;
            self.state = RecognizerState::Possible;
            self.velocity.reset();
            self.velocity.add_position(event.time_millis, event.position);
            return None;
        }

        if self.pointer != Some(event.id) {
            return None;
        }

        let translation = event.position - self.origin;
        match event.kind {
            PointerEventKind::Down => None,
            PointerEventKind::Move => {
                self.velocity.add_position(event.time_millis, event.position);
                self.last_translation = translation;
                match self.state {
                    RecognizerState::Possible if translation.distance() > self.touch_slop => {
                        self.state = RecognizerState::Panning;
                        Some(PanEvent::began(translation, self.velocity.velocity()))
                    }
                    RecognizerState::Panning => {
                        Some(PanEvent::changed(translation, self.velocity.velocity()))
                    }
                    _ => None,
                }
            }
            PointerEventKind::Up => {
                self.velocity.add_position(event.time_millis, event.position);
                let velocity = self.velocity.velocity();
                let was_panning = self.is_panning();
                self.reset();
                was_panning.then(|| PanEvent::ended(translation, velocity))
            }
            PointerEventKind::Cancel => {
                let was_panning = self.is_panning();
                let last_translation = self.last_translation;
                self.reset();
                was_panning.then(|| PanEvent::cancelled(last_translation))
            }
        }
    }

    /// Drop the tracked pointer. An active pan is abandoned without events.
    pub fn reset(&mut self) {
        self.state = RecognizerState::Idle;
        self.pointer = None;
        self.last_translation = Point::ZERO;
        self.velocity.reset();
    }
}

#[cfg(test)]
#[path = "../../../tests/pan_recognizer_tests.rs"]
mod tests;
