//! The demo screen and its gesture player.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use panview_animation::{Animatable, AnimationSpec, AnimationType, Easing};
use panview_core::{FrameClock, FRAME_INTERVAL_NANOS};
use panview_foundation::{PanRecognizer, PointerEvent, PointerEventKind};
use panview_ui::{PanGestureAction, PanGestureView, SwipeDirection};
use panview_ui_graphics::{Color, Icon, Point};

use crate::script::DemoStep;
use crate::settings::DemoSettings;

/// Upper bound on frames spent waiting for a gesture to settle.
const MAX_SETTLE_FRAMES: usize = 600;

/// What playing one scripted gesture did.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureReport {
    pub step: DemoStep,
    /// Direction the view committed to when the gesture ended.
    pub committed: Option<SwipeDirection>,
    pub triggered: Option<SwipeDirection>,
    /// Frames from the first move until everything settled.
    pub frames: usize,
}

struct ContainerState {
    label: String,
    label_color: Color,
    background_from: Color,
    background_to: Color,
    /// Progress of the recolor from `background_from` to `background_to`.
    recolor: Animatable<f32>,
    last_trigger: Option<SwipeDirection>,
}

impl ContainerState {
    fn background(&self) -> Color {
        self.background_from
            .lerp(&self.background_to, self.recolor.value())
    }
}

pub struct DemoScreen {
    settings: DemoSettings,
    clock: FrameClock,
    view: PanGestureView,
    recognizer: PanRecognizer,
    container: Rc<RefCell<ContainerState>>,
    frame: u64,
}

impl DemoScreen {
    pub fn new(settings: DemoSettings) -> anyhow::Result<Self> {
        let clock = FrameClock::new();
        let view = PanGestureView::with_settings(clock.clone(), settings.gesture);
        let container = Rc::new(RefCell::new(ContainerState {
            label: settings.idle_label.clone(),
            label_color: settings.idle_label_color,
            background_from: settings.idle_background,
            background_to: settings.idle_background,
            recolor: Animatable::new(1.0, clock.clone()),
            last_trigger: None,
        }));

        let recolor = AnimationType::Tween(AnimationSpec::tween(
            settings.recolor_millis,
            Easing::EaseInOut,
        ));
        for style in &settings.actions {
            let container = Rc::clone(&container);
            let color = style.color;
            let label_color = settings.triggered_label_color;
            let action = PanGestureAction::new(style.direction, Icon::named(style.icon))
                .with_background_color(color)
                .on_trigger(move |direction| {
                    let mut container = container.borrow_mut();
                    container.background_from = container.background();
                    container.background_to = color;
                    container.label = format!("Panned {direction}");
                    container.label_color = label_color;
                    container.last_trigger = Some(direction);
                    container.recolor.snap_to(0.0);
                    container.recolor.animate_to(1.0, recolor);
                    log::info!("{}", container.label);
                });
            view.register(action)
                .with_context(|| format!("registering the {} action", style.direction))?;
        }

        view.set_on_direction_resolved(|direction| log::debug!("swiping {direction}"));

        Ok(Self {
            settings,
            clock,
            view,
            recognizer: PanRecognizer::new(),
            container,
            frame: 0,
        })
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    pub fn view(&self) -> &PanGestureView {
        &self.view
    }

    pub fn label(&self) -> String {
        self.container.borrow().label.clone()
    }

    pub fn label_color(&self) -> Color {
        self.container.borrow().label_color
    }

    pub fn background(&self) -> Color {
        self.container.borrow().background()
    }

    /// Center of the container, offset by the content displacement.
    pub fn container_center(&self) -> Point {
        self.settings.container_size.center() + self.view.content_offset()
    }

    fn time_millis(&self) -> i64 {
        (self.frame * FRAME_INTERVAL_NANOS / 1_000_000) as i64
    }

    fn advance_frame(&mut self) {
        self.frame += 1;
        self.clock
            .drain_frame_callbacks(self.frame * FRAME_INTERVAL_NANOS);
    }

    fn pointer(&mut self, kind: PointerEventKind, position: Point) {
        let event = PointerEvent::new(kind, position, self.time_millis());
        if let Some(pan) = self.recognizer.handle(&event) {
            self.view.handle_pan(pan);
        }
    }

    /// Play one swipe from the container center and wait for it to settle.
    pub fn play(&mut self, step: DemoStep) -> GestureReport {
        let previous_trigger = self.container.borrow_mut().last_trigger.take();
        let start = self.settings.container_size.center();
        let steps = self.settings.swipe_steps.max(1);
        let delta = step
            .direction
            .axis()
            .vector(step.direction.sign() * step.distance / steps as f32);

        self.pointer(PointerEventKind::Down, start);
        let mut position = start;
        let mut frames = 0;
        for _ in 0..steps {
            position = position + delta;
            self.advance_frame();
            self.pointer(PointerEventKind::Move, position);
            frames += 1;
        }
        // Let the last move reach the view.
        self.advance_frame();
        frames += 1;

        let committed = self.view.committed_direction();
        self.pointer(PointerEventKind::Up, position);

        while self.clock.has_frame_callbacks() && frames < MAX_SETTLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }

        let triggered = {
            let mut container = self.container.borrow_mut();
            let triggered = container.last_trigger;
            if triggered.is_none() {
                container.last_trigger = previous_trigger;
            }
            triggered
        };
        GestureReport {
            step,
            committed,
            triggered,
            frames,
        }
    }
}
