//! Scripted gestures.
//!
//! A script is a list of words, one per gesture: a direction optionally
//! followed by `:distance`, e.g. `right up:30 left:120`.

use std::fmt;

use panview_ui::SwipeDirection;

/// Drag distance of a step without an explicit one.
pub const DEFAULT_DISTANCE: f32 = 90.0;

/// Played when no script is given.
pub const DEFAULT_SCRIPT: &str = "right left:10 left up down";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoStep {
    pub direction: SwipeDirection,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptError {
    UnknownDirection(String),
    InvalidDistance(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownDirection(word) => {
                write!(f, "unknown direction '{word}', expected up, down, left or right")
            }
            ScriptError::InvalidDistance(word) => {
                write!(f, "invalid distance '{word}', expected a positive number")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

fn parse_direction(word: &str) -> Result<SwipeDirection, ScriptError> {
    SwipeDirection::ALL
        .into_iter()
        .find(|direction| direction.to_string().eq_ignore_ascii_case(word))
        .ok_or_else(|| ScriptError::UnknownDirection(word.to_string()))
}

fn parse_step(word: &str) -> Result<DemoStep, ScriptError> {
    let (direction, distance) = match word.split_once(':') {
        Some((direction, distance)) => {
            let distance = distance
                .parse::<f32>()
                .ok()
                .filter(|distance| distance.is_finite() && *distance > 0.0)
                .ok_or_else(|| ScriptError::InvalidDistance(distance.to_string()))?;
            (direction, distance)
        }
        None => (word, DEFAULT_DISTANCE),
    };
    Ok(DemoStep {
        direction: parse_direction(direction)?,
        distance,
    })
}

pub fn parse_script<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Vec<DemoStep>, ScriptError> {
    words.into_iter().map(parse_step).collect()
}
