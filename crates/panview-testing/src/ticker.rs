//! A ticker fired by hand.

use std::cell::RefCell;
use std::rc::Rc;

use panview_core::Ticker;

#[derive(Default)]
struct ManualTickerState {
    on_tick: Option<Box<dyn FnMut(u64)>>,
    running: bool,
    generation: u64,
    starts: usize,
    stops: usize,
}

/// [`Ticker`] that only fires when a test calls [`ManualTicker::tick`].
///
/// Clones share state, so a test can keep one handle while the view under
/// test owns another.
#[derive(Clone, Default)]
pub struct ManualTicker {
    state: Rc<RefCell<ManualTickerState>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the installed callback once. Returns false when disarmed.
    pub fn tick(&self, frame_time_nanos: u64) -> bool {
        let (on_tick, generation) = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return false;
            }
            (state.on_tick.take(), state.generation)
        };
        let Some(mut on_tick) = on_tick else {
            return false;
        };

        on_tick(frame_time_nanos);

        let mut state = self.state.borrow_mut();
        if state.running && state.generation == generation {
            state.on_tick = Some(on_tick);
        } else {
            drop(state);
            drop(on_tick);
        }
        true
    }

    /// Number of times the ticker was armed.
    pub fn start_count(&self) -> usize {
        self.state.borrow().starts
    }

    /// Number of times a running ticker was disarmed.
    pub fn stop_count(&self) -> usize {
        self.state.borrow().stops
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, on_tick: Box<dyn FnMut(u64)>) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.running = true;
            state.generation += 1;
            state.starts += 1;
            state.on_tick.replace(on_tick)
        };
        drop(previous);
    }

    fn stop(&mut self) {
        let on_tick = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return;
            }
            state.running = false;
            state.generation += 1;
            state.stops += 1;
            state.on_tick.take()
        };
        drop(on_tick);
    }

    fn is_running(&self) -> bool {
        self.state.borrow().running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn ticks_only_while_running() {
        let mut ticker = ManualTicker::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        ticker.start(Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(ticker.tick(1));
        assert!(ticker.tick(2));
        ticker.stop();
        assert!(!ticker.tick(3));
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut ticker = ManualTicker::new();
        ticker.start(Box::new(|_| {}));
        ticker.stop();
        ticker.stop();
        assert_eq!(ticker.start_count(), 1);
        assert_eq!(ticker.stop_count(), 1);
        assert!(!ticker.is_running());
    }

    #[test]
    fn callback_can_stop_its_own_ticker() {
        let ticker = ManualTicker::new();
        let handle = Rc::new(RefCell::new(ticker.clone()));
        let inner = Rc::clone(&handle);
        handle
            .borrow_mut()
            .start(Box::new(move |_| inner.borrow_mut().stop()));

        assert!(ticker.tick(1));
        assert!(!ticker.is_running());
        assert!(!ticker.tick(2));
    }
}
