use panview_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample as delivered by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event timestamp in milliseconds, used for velocity tracking.
    pub time_millis: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_millis,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// Phase of a continuous pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Cancelled,
    Failed,
    Ended,
}

impl PanPhase {
    /// Whether this phase ends the gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, PanPhase::Cancelled | PanPhase::Failed | PanPhase::Ended)
    }
}

/// One sample of a pan gesture.
///
/// `translation` is measured from where the gesture began, `velocity` is in
/// pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation: Point,
    pub velocity: Point,
}

impl PanEvent {
    pub fn new(phase: PanPhase, translation: Point, velocity: Point) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    pub fn began(translation: Point, velocity: Point) -> Self {
        Self::new(PanPhase::Began, translation, velocity)
    }

    pub fn changed(translation: Point, velocity: Point) -> Self {
        Self::new(PanPhase::Changed, translation, velocity)
    }

    pub fn ended(translation: Point, velocity: Point) -> Self {
        Self::new(PanPhase::Ended, translation, velocity)
    }

    pub fn cancelled(translation: Point) -> Self {
        Self::new(PanPhase::Cancelled, translation, Point::ZERO)
    }

    pub fn failed(translation: Point) -> Self {
        Self::new(PanPhase::Failed, translation, Point::ZERO)
    }
}
