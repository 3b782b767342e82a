//! Core runtime pieces for Panview.
//!
//! Everything here is single-threaded: the host owns a [`FrameClock`] and
//! drains it once per display refresh, and widgets schedule their per-frame
//! work on it.

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use ticker::{FrameTicker, Ticker};

/// Nanoseconds between frames on a 60 Hz display.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

pub mod prelude {
    pub use crate::{FrameCallbackRegistration, FrameClock, FrameTicker, Ticker};
}
