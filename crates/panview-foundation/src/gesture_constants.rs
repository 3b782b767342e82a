//! Shared gesture constants.
//!
//! All values are in logical pixels.

/// Touch slop before a pointer drag is recognised as a pan.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Drag distance below which the content follows the finger one to one.
pub const LINEAR_LIMIT: f32 = 44.0;

/// Asymptote of the elastic mapping; the content never moves this far.
pub const FULL_LIMIT: f32 = 100.0;

/// Distance over which an action icon fades in; an indicator whose reveal
/// fraction reaches 1.0 is active.
pub const MINIMUM_TRANSLATION: f32 = 15.0;

/// Edge length of an action icon.
pub const ICON_SIZE: f32 = 44.0;
