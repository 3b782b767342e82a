//! Pan gesture interpretation.
//!
//! A gesture commits to the direction resolved from its first sample and may
//! only invert to the opposite direction afterwards. Raw input only caches
//! the latest translation; the content offset and indicator activation are
//! recomputed once per frame by a [`Ticker`] armed for the gesture's lifetime.
//!
//! When the gesture ends with the committed indicator active, the content
//! springs back to rest and the action fires once that spring finished.
//! Anything else eases back to rest without firing.

use std::cell::RefCell;
use std::rc::Rc;

use panview_animation::{Animatable, AnimationType};
use panview_core::{FrameClock, FrameTicker, Ticker};
use panview_foundation::{
    resolve_direction, ActivationState, Axis, PanEvent, PanPhase, SwipeDirection,
};
use panview_ui_graphics::Point;
use smallvec::SmallVec;

use crate::action::{ActionError, ActionRegistry, PanGestureAction};
use crate::indicator::{ActionIndicator, IndicatorState};
use crate::settings::PanGestureSettings;

/// Outcome of one frame update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanUpdate {
    pub direction: SwipeDirection,
    /// Latest translation of the gesture.
    pub translation: Point,
    /// Elastic content offset applied for it.
    pub content_offset: Point,
    /// Activation of the committed direction's indicator, default when no
    /// action is registered for it.
    pub activation: ActivationState,
    pub frame_time_nanos: u64,
}

type Listener<T> = Rc<RefCell<dyn FnMut(T)>>;

struct GestureSession {
    direction: SwipeDirection,
    last_translation: Point,
}

struct ViewInner {
    settings: PanGestureSettings,
    clock: FrameClock,
    registry: ActionRegistry,
    indicators: [Option<ActionIndicator>; 4],
    /// Content offset along `axis`.
    offset: Animatable<f32>,
    axis: Axis,
    session: Option<GestureSession>,
    on_update: Option<Listener<PanUpdate>>,
    on_direction_resolved: Option<Listener<SwipeDirection>>,
}

impl ViewInner {
    fn indicator(&self, direction: SwipeDirection) -> Option<&ActionIndicator> {
        direction
            .index()
            .and_then(|index| self.indicators[index].as_ref())
    }

    fn reset_indicators(&mut self) {
        let settings = self.settings;
        for indicator in self.indicators.iter_mut().flatten() {
            indicator.reset(&settings);
        }
    }

    /// Offset seen by an indicator along `axis`.
    fn offset_along(&self, axis: Axis) -> f32 {
        if axis == self.axis {
            self.offset.value()
        } else {
            0.0
        }
    }

    /// Apply the cached translation. Returns the update and whether the
    /// committed direction inverted.
    fn update(&mut self, frame_time_nanos: u64) -> Option<(PanUpdate, bool)> {
        let session = self.session.as_mut()?;
        if session.direction.is_none() {
            return None;
        }

        let translation = session.last_translation;
        let inverted = session.direction.was_inverted(translation);
        if inverted {
            session.direction = session.direction.opposite();
        }
        let direction = session.direction;

        let axis = direction.axis();
        let offset = self.settings.elastic.apply(axis.component(translation));
        self.axis = axis;
        self.offset.snap_to(offset);

        let settings = self.settings;
        for indicator in self.indicators.iter_mut().flatten() {
            let own = indicator.direction();
            let along = if own.axis() == axis { offset } else { 0.0 };
            indicator.update(along, own == direction, &settings);
        }

        let activation = self
            .indicator(direction)
            .map(ActionIndicator::activation)
            .unwrap_or_default();
        log::trace!("frame {frame_time_nanos}: {direction} offset {offset:.2}");

        let update = PanUpdate {
            direction,
            translation,
            content_offset: axis.vector(offset),
            activation,
            frame_time_nanos,
        };
        Some((update, inverted))
    }
}

/// View that moves its content with a directional pan gesture and triggers
/// the action registered for the swipe direction.
///
/// Feed it [`PanEvent`]s from a [`PanRecognizer`](panview_foundation::PanRecognizer)
/// or any other pan source, and drain its [`FrameClock`] once per display
/// refresh.
pub struct PanGestureView {
    inner: Rc<RefCell<ViewInner>>,
    ticker: Box<dyn Ticker>,
}

impl PanGestureView {
    pub fn new(clock: FrameClock) -> Self {
        Self::with_settings(clock, PanGestureSettings::default())
    }

    pub fn with_settings(clock: FrameClock, settings: PanGestureSettings) -> Self {
        let ticker = Box::new(FrameTicker::new(clock.clone()));
        Self::with_ticker(clock, settings, ticker)
    }

    /// Create a view whose frame updates are driven by `ticker`. Animations
    /// still run on `clock`.
    pub fn with_ticker(
        clock: FrameClock,
        settings: PanGestureSettings,
        ticker: Box<dyn Ticker>,
    ) -> Self {
        let inner = ViewInner {
            settings,
            offset: Animatable::new(0.0, clock.clone()),
            clock,
            registry: ActionRegistry::new(),
            indicators: Default::default(),
            axis: Axis::Horizontal,
            session: None,
            on_update: None,
            on_direction_resolved: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            ticker,
        }
    }

    pub fn settings(&self) -> PanGestureSettings {
        self.inner.borrow().settings
    }

    /// Register `action` for its direction, returning the action it
    /// replaced. The replaced action's indicator is discarded.
    pub fn register(
        &self,
        action: PanGestureAction,
    ) -> Result<Option<PanGestureAction>, ActionError> {
        let direction = action.direction();
        let mut inner = self.inner.borrow_mut();
        let replaced = inner.registry.register(action)?;
        if let Some(index) = direction.index() {
            let indicator = ActionIndicator::new(direction, inner.clock.clone());
            inner.indicators[index] = Some(indicator);
        }
        log::debug!(
            "{} action for {direction}",
            if replaced.is_some() { "replaced" } else { "registered" }
        );
        Ok(replaced)
    }

    pub fn unregister(&self, direction: SwipeDirection) -> Option<PanGestureAction> {
        let mut inner = self.inner.borrow_mut();
        let removed = inner.registry.unregister(direction)?;
        if let Some(index) = direction.index() {
            inner.indicators[index] = None;
        }
        Some(removed)
    }

    pub fn action(&self, direction: SwipeDirection) -> Option<PanGestureAction> {
        self.inner.borrow().registry.action(direction).cloned()
    }

    pub fn registered_directions(&self) -> SmallVec<[SwipeDirection; 4]> {
        self.inner.borrow().registry.registered_directions()
    }

    /// Called after every frame update.
    pub fn set_on_update(&self, listener: impl FnMut(PanUpdate) + 'static) {
        self.inner.borrow_mut().on_update = Some(Rc::new(RefCell::new(listener)));
    }

    /// Called when a gesture resolves its direction and whenever it inverts.
    pub fn set_on_direction_resolved(&self, listener: impl FnMut(SwipeDirection) + 'static) {
        self.inner.borrow_mut().on_direction_resolved = Some(Rc::new(RefCell::new(listener)));
    }

    pub fn handle_pan(&mut self, event: PanEvent) {
        match event.phase {
            PanPhase::Began => self.begin(event),
            PanPhase::Changed => self.change(event),
            PanPhase::Ended | PanPhase::Cancelled | PanPhase::Failed => self.finish(event.phase),
        }
    }

    fn begin(&mut self, event: PanEvent) {
        if self.inner.borrow().session.is_some() {
            log::warn!("pan began while another gesture was active, restarting");
            self.ticker.stop();
        }

        let direction = resolve_direction(event.translation, event.velocity);

        // Grabbing the content interrupts a running settle, dropping any
        // pending trigger.
        let offset = self.inner.borrow().offset.clone();
        offset.stop();

        {
            let mut inner = self.inner.borrow_mut();
            inner.reset_indicators();
            inner.session = Some(GestureSession {
                direction,
                last_translation: event.translation,
            });
        }
        log::debug!("pan began, direction {direction}");
        Self::notify_direction(&self.inner, direction);

        let weak = Rc::downgrade(&self.inner);
        self.ticker.start(Box::new(move |frame_time_nanos| {
            if let Some(inner) = weak.upgrade() {
                Self::on_frame(&inner, frame_time_nanos);
            }
        }));
    }

    fn change(&mut self, event: PanEvent) {
        let mut inner = self.inner.borrow_mut();
        match inner.session.as_mut() {
            Some(session) => session.last_translation = event.translation,
            None => log::warn!("pan changed without an active gesture"),
        }
    }

    fn finish(&mut self, phase: PanPhase) {
        self.ticker.stop();

        let session = self.inner.borrow_mut().session.take();
        let Some(session) = session else {
            log::warn!("pan {phase:?} without an active gesture");
            return;
        };
        let direction = session.direction;

        let (trigger, offset, settings) = {
            let mut inner = self.inner.borrow_mut();
            let should_trigger = phase == PanPhase::Ended
                && inner
                    .indicator(direction)
                    .is_some_and(|indicator| indicator.activation().should_trigger);
            // The action fires even if it is replaced or removed while the
            // content settles.
            let trigger = should_trigger.then(|| {
                inner
                    .registry
                    .action(direction)
                    .and_then(PanGestureAction::trigger_callback)
            });
            inner.reset_indicators();
            (trigger, inner.offset.clone(), inner.settings)
        };

        match trigger {
            Some(callback) => {
                log::debug!("pan ended, {direction} triggers after settling");
                offset.animate_to_with_completion(
                    0.0,
                    AnimationType::Spring(settings.trigger_spring),
                    move |reason| {
                        if !reason.is_finished() {
                            log::debug!("settle interrupted, {direction} not triggered");
                            return;
                        }
                        match callback {
                            Some(callback) => {
                                log::debug!("triggering {direction} action");
                                (callback.borrow_mut())(direction);
                            }
                            None => log::debug!("no {direction} callback to trigger"),
                        }
                    },
                );
            }
            None => {
                log::debug!("pan {phase:?} in {direction}, resetting");
                if offset.value() != 0.0 {
                    offset.animate_to(0.0, AnimationType::Tween(settings.settle_animation));
                }
            }
        }
    }

    fn on_frame(inner: &Rc<RefCell<ViewInner>>, frame_time_nanos: u64) {
        let result = inner.borrow_mut().update(frame_time_nanos);
        let Some((update, inverted)) = result else {
            return;
        };

        if inverted {
            log::debug!("pan inverted to {}", update.direction);
            Self::notify_direction(inner, update.direction);
        }

        let listener = inner.borrow().on_update.clone();
        if let Some(listener) = listener {
            (listener.borrow_mut())(update);
        }
    }

    fn notify_direction(inner: &Rc<RefCell<ViewInner>>, direction: SwipeDirection) {
        let listener = inner.borrow().on_direction_resolved.clone();
        if let Some(listener) = listener {
            (listener.borrow_mut())(direction);
        }
    }

    /// Current content displacement from its rest position.
    pub fn content_offset(&self) -> Point {
        let inner = self.inner.borrow();
        inner.axis.vector(inner.offset.value())
    }

    /// Render state of the indicator for `direction`, if an action is
    /// registered for it.
    pub fn indicator_state(&self, direction: SwipeDirection) -> Option<IndicatorState> {
        let inner = self.inner.borrow();
        let indicator = inner.indicator(direction)?;
        let offset = inner.offset_along(direction.axis());
        Some(indicator.state(offset, &inner.settings))
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().session.is_some()
    }

    /// Direction of the active gesture.
    pub fn committed_direction(&self) -> Option<SwipeDirection> {
        self.inner
            .borrow()
            .session
            .as_ref()
            .map(|session| session.direction)
    }

    /// Whether the content is animating back to rest.
    pub fn is_settling(&self) -> bool {
        let inner = self.inner.borrow();
        inner.session.is_none() && inner.offset.is_running()
    }

    /// Whether frame updates are armed.
    pub fn is_tracking(&self) -> bool {
        self.ticker.is_running()
    }
}

#[cfg(test)]
#[path = "tests/pan_gesture_view_tests.rs"]
mod tests;
