//! Panview demo screen.
//!
//! A round container labelled "Pan Anywhere" inside a pan gesture view with
//! one action per direction. Triggering an action recolors the container and
//! names the direction in the label. The screen is headless: gestures are
//! played from a script and the resulting state is printed.

pub mod screen;
pub mod script;
pub mod settings;

pub use screen::{DemoScreen, GestureReport};
pub use script::{parse_script, DemoStep, ScriptError, DEFAULT_SCRIPT};
pub use settings::{ActionStyle, DemoSettings};
