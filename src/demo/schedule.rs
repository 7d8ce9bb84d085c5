//! Timer-driven work the demo hands back to its host.
//!
//! The controller never touches timers itself. Operations that need a deferred
//! follow-up return a [`Deferred`], the page component arms a `Timeout` for it,
//! parks the handle in [`PendingTimers`] and feeds the task back when it fires.
//! Tests fire tasks by hand.

use std::collections::HashMap;

use web_sys::js_sys::Math;

use crate::demo::chat::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    ScrollChat,
    DeliverReply(ChatMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay_ms: u32,
    pub task: DeferredTask,
}

/// Live timer handles keyed by id. Dropping a handle cancels its timer, so
/// dropping the registry cancels everything still pending.
pub struct PendingTimers<H> {
    handles: HashMap<u32, H>,
    next_id: u32,
}

impl<H> PendingTimers<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            next_id: 0,
        }
    }

    /// Reserves the id the next armed timer will carry.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn insert(&mut self, id: u32, handle: H) {
        self.handles.insert(id, handle);
    }

    /// Called when timer `id` fires; its handle is no longer needed.
    pub fn finish(&mut self, id: u32) -> Option<H> {
        self.handles.remove(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_f64(&mut self) -> f64 {
        Math::random()
    }
}

#[cfg(test)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct CountsDrops(Rc<Cell<usize>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn finished_timers_are_released_and_the_rest_cancel_on_drop() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = PendingTimers::new();
        let scroll = timers.next_id();
        let reply = timers.next_id();
        assert_ne!(scroll, reply);
        timers.insert(scroll, CountsDrops(dropped.clone()));
        timers.insert(reply, CountsDrops(dropped.clone()));
        assert_eq!(timers.len(), 2);

        drop(timers.finish(scroll));
        assert_eq!(dropped.get(), 1);
        assert!(timers.finish(scroll).is_none());
        assert_eq!(timers.len(), 1);

        drop(timers);
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut random = SequenceRandom::new(&[0.0, 0.249, 0.25, 0.999_999]);
        assert_eq!(random.pick(4), 0);
        assert_eq!(random.pick(4), 0);
        assert_eq!(random.pick(4), 1);
        assert_eq!(random.pick(4), 3);
    }
}
