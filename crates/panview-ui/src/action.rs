//! Swipe actions and their per-direction registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use panview_foundation::SwipeDirection;
use panview_ui_graphics::{Color, Icon};
use smallvec::SmallVec;

/// Callback invoked with the committed direction when an action triggers.
pub type TriggerCallback = Rc<RefCell<dyn FnMut(SwipeDirection)>>;

/// Errors reported when registering actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// Actions can only be registered for up, down, left and right.
    InvalidDirection(SwipeDirection),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidDirection(direction) => {
                write!(f, "cannot register an action for direction {direction}")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// An action revealed behind the content when it is dragged in `direction`.
#[derive(Clone)]
pub struct PanGestureAction {
    direction: SwipeDirection,
    icon: Icon,
    background_color: Option<Color>,
    tint_color: Option<Color>,
    on_trigger: Option<TriggerCallback>,
}

impl PanGestureAction {
    pub fn new(direction: SwipeDirection, icon: Icon) -> Self {
        Self {
            direction,
            icon,
            background_color: None,
            tint_color: None,
            on_trigger: None,
        }
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    pub fn on_trigger(mut self, callback: impl FnMut(SwipeDirection) + 'static) -> Self {
        self.on_trigger = Some(Rc::new(RefCell::new(callback)));
        self
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Background of the revealed strip, white unless set.
    pub fn background_color(&self) -> Color {
        self.background_color.unwrap_or(Color::WHITE)
    }

    /// Icon tint, white unless set.
    pub fn tint_color(&self) -> Color {
        self.tint_color.unwrap_or(Color::WHITE)
    }

    pub fn trigger_callback(&self) -> Option<TriggerCallback> {
        self.on_trigger.clone()
    }
}

impl fmt::Debug for PanGestureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanGestureAction")
            .field("direction", &self.direction)
            .field("icon", &self.icon)
            .field("background_color", &self.background_color())
            .field("tint_color", &self.tint_color())
            .field("has_trigger", &self.on_trigger.is_some())
            .finish()
    }
}

/// At most one action per swipe direction.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    slots: [Option<PanGestureAction>; 4],
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action`, returning the action it replaced.
    pub fn register(
        &mut self,
        action: PanGestureAction,
    ) -> Result<Option<PanGestureAction>, ActionError> {
        let index = action
            .direction()
            .index()
            .ok_or(ActionError::InvalidDirection(action.direction()))?;
        Ok(self.slots[index].replace(action))
    }

    pub fn unregister(&mut self, direction: SwipeDirection) -> Option<PanGestureAction> {
        direction
            .index()
            .and_then(|index| self.slots[index].take())
    }

    pub fn action(&self, direction: SwipeDirection) -> Option<&PanGestureAction> {
        direction
            .index()
            .and_then(|index| self.slots[index].as_ref())
    }

    pub fn contains(&self, direction: SwipeDirection) -> bool {
        self.action(direction).is_some()
    }

    pub fn registered_directions(&self) -> SmallVec<[SwipeDirection; 4]> {
        SwipeDirection::ALL
            .into_iter()
            .filter(|direction| self.contains(*direction))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
