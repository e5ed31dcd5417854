// SPDX-License-Identifier: MPL-2.0
//! Time sources for schedulers.
//!
//! [`MonotonicClock`] reads the real monotonic clock. [`VirtualClock`] is a
//! frozen, manually advanced timeline that makes timer behavior fully
//! deterministic in tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Supplies the current instant to a scheduler.
pub trait Clock {
    /// Returns the current instant on this clock's timeline.
    fn now(&self) -> Instant;
}

/// Real time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock.
///
/// Clones share one timeline, so a clock handed to a scheduler can still be
/// advanced from the test body. Time only moves when [`advance`] is called.
///
/// [`advance`]: VirtualClock::advance
#[derive(Debug, Clone)]
pub struct VirtualClock {
    now: Rc<Cell<Instant>>,
}

impl VirtualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the timeline forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
