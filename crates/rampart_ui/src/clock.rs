//! Time sources.
//!
//! Effect progress is derived from timestamps, never from frame counts, so
//! the scheduler only needs "what time is it". Production uses
//! [`MonotonicClock`]; tests and replays drive a [`ManualClock`].

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

/// Milliseconds on a monotonic timeline.
pub type Millis = u64;

/// Source of the current time.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> Millis;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock reading zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> Millis {
        Millis::try_from(self.origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }
}

/// Hand-driven clock.
///
/// Clones share the same timeline, so a test can keep one handle and give
/// another to the scheduler.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Millis>>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Millis) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Jumps to an absolute time.
    pub fn set(&self, now: Millis) {
        *self.now.lock() = now;
    }

    /// Moves time forward by `delta` milliseconds.
    pub fn advance(&self, delta: Millis) {
        let mut now = self.now.lock();
        *now = now.saturating_add(delta);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        *self.now.lock()
    }
}
