//! Recurring frame-cadence callbacks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{FrameCallbackRegistration, FrameClock};

/// Recurring per-frame callback that can be armed and disarmed.
///
/// `stop` must be idempotent, and no tick may be delivered once `stop`
/// returned, even if the underlying frame was already pending.
pub trait Ticker {
    /// Arm the ticker, replacing any callback installed by an earlier start.
    fn start(&mut self, on_tick: Box<dyn FnMut(u64)>);

    /// Disarm the ticker.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

#[derive(Default)]
struct TickerState {
    registration: Option<FrameCallbackRegistration>,
    on_tick: Option<Box<dyn FnMut(u64)>>,
    running: bool,
    generation: u64,
}

/// [`Ticker`] firing once per drained frame of a [`FrameClock`].
pub struct FrameTicker {
    clock: FrameClock,
    state: Rc<RefCell<TickerState>>,
}

impl FrameTicker {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            state: Rc::new(RefCell::new(TickerState::default())),
        }
    }

    fn schedule(state: &Rc<RefCell<TickerState>>, clock: &FrameClock) {
        let weak = Rc::downgrade(state);
        let next_clock = clock.clone();
        let registration = clock.with_frame_nanos(move |time| {
            Self::on_frame(&weak, &next_clock, time);
        });
        state.borrow_mut().registration = Some(registration);
    }

    fn on_frame(state: &Weak<RefCell<TickerState>>, clock: &FrameClock, time: u64) {
        let Some(state) = state.upgrade() else {
            return;
        };

        let (on_tick, generation) = {
            let mut guard = state.borrow_mut();
            guard.registration = None;
            if !guard.running {
                return;
            }
            (guard.on_tick.take(), guard.generation)
        };
        let Some(mut on_tick) = on_tick else {
            return;
        };

        on_tick(time);

        // The callback may have stopped or restarted the ticker.
        let reschedule = {
            let mut guard = state.borrow_mut();
            if guard.running && guard.generation == generation {
                guard.on_tick = Some(on_tick);
                true
            } else {
                false
            }
        };
        if reschedule {
            Self::schedule(&state, clock);
        }
    }
}

impl Ticker for FrameTicker {
    fn start(&mut self, on_tick: Box<dyn FnMut(u64)>) {
        let registration = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.running = true;
            state.on_tick = Some(on_tick);
            state.registration.take()
        };
        drop(registration);
        Self::schedule(&self.state, &self.clock);
    }

    fn stop(&mut self) {
        let (registration, on_tick) = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return;
            }
            state.running = false;
            state.generation += 1;
            (state.registration.take(), state.on_tick.take())
        };
        // Dropped outside the borrow: the callback may own handles that
        // reach back into this ticker.
        drop(registration);
        drop(on_tick);
    }

    fn is_running(&self) -> bool {
        self.state.borrow().running
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_ticker(clock: &FrameClock) -> (FrameTicker, Rc<Cell<u32>>) {
        let mut ticker = FrameTicker::new(clock.clone());
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        ticker.start(Box::new(move |_| counter.set(counter.get() + 1)));
        (ticker, ticks)
    }

    #[test]
    fn ticks_once_per_frame_while_running() {
        let clock = FrameClock::new();
        let (ticker, ticks) = counting_ticker(&clock);

        for frame in 1..=3 {
            clock.drain_frame_callbacks(frame * crate::FRAME_INTERVAL_NANOS);
        }

        assert!(ticker.is_running());
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn stop_prevents_pending_tick() {
        let clock = FrameClock::new();
        let (mut ticker, ticks) = counting_ticker(&clock);
        assert!(clock.has_frame_callbacks());

        ticker.stop();
        clock.drain_frame_callbacks(crate::FRAME_INTERVAL_NANOS);

        assert!(!ticker.is_running());
        assert_eq!(ticks.get(), 0);
        assert!(!clock.has_frame_callbacks());
    }

    #[test]
    fn stop_is_idempotent() {
        let clock = FrameClock::new();
        let (mut ticker, _ticks) = counting_ticker(&clock);

        ticker.stop();
        ticker.stop();

        assert!(!ticker.is_running());
        assert_eq!(clock.pending_frame_callbacks(), 0);
    }

    #[test]
    fn restart_replaces_callback() {
        let clock = FrameClock::new();
        let (mut ticker, first) = counting_ticker(&clock);

        let second = Rc::new(Cell::new(0));
        let counter = Rc::clone(&second);
        ticker.start(Box::new(move |_| counter.set(counter.get() + 1)));
        clock.drain_frame_callbacks(crate::FRAME_INTERVAL_NANOS);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(clock.pending_frame_callbacks(), 1);
    }

    #[test]
    fn dropping_ticker_disarms_clock() {
        let clock = FrameClock::new();
        let (ticker, ticks) = counting_ticker(&clock);

        drop(ticker);
        clock.drain_frame_callbacks(crate::FRAME_INTERVAL_NANOS);

        assert_eq!(ticks.get(), 0);
        assert!(!clock.has_frame_callbacks());
    }
}
