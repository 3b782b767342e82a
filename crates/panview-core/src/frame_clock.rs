use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

#[derive(Default)]
struct FrameClockInner {
    next_id: Cell<FrameCallbackId>,
    /// Pending callbacks in registration order.
    pending: RefCell<BTreeMap<FrameCallbackId, FrameCallback>>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl FrameClockInner {
    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().insert(id, callback);
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        self.pending.borrow_mut().remove(&id);
    }

    /// Remove the oldest callback registered before `cutoff`.
    fn pop_before(&self, cutoff: FrameCallbackId) -> Option<FrameCallback> {
        let mut pending = self.pending.borrow_mut();
        let (&id, _) = pending.first_key_value()?;
        if id >= cutoff {
            return None;
        }
        pending.remove(&id)
    }
}

/// Host-driven display clock.
///
/// Callbacks are one-shot: whoever needs the next frame as well registers
/// again from inside its callback. Callbacks registered while the clock is
/// draining run on the following drain.
#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.register(Box::new(callback));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Run every callback that was pending when the frame started.
    ///
    /// Returns the number of callbacks that ran. A callback cancelled by an
    /// earlier callback of the same frame does not run.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner.last_frame_nanos.set(Some(frame_time_nanos));
        let cutoff = self.inner.next_id.get();

        let mut ran = 0;
        while let Some(callback) = self.inner.pop_before(cutoff) {
            callback(frame_time_nanos);
            ran += 1;
        }
        log::trace!("frame {frame_time_nanos}: ran {ran} callbacks");
        ran
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.pending.borrow().is_empty()
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Timestamp of the most recently drained frame.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.last_frame_nanos.get()
    }
}

/// Handle to a pending frame callback; dropping it cancels the callback.
///
/// Cancelling after the callback ran, or after the clock is gone, does
/// nothing.
pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let (Some(id), Some(clock)) = (self.id.take(), self.clock.upgrade()) else {
            return;
        };
        clock.cancel(id);
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
