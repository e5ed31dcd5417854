// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler driven by the host's tick.
//!
//! Hosts that already run a periodic tick (100ms is plenty for toast
//! dismissal) call [`TickScheduler::run_due`] from it. Entries fire in
//! deadline order, and internal borrows are released before each task runs,
//! so a task may schedule, cancel, or touch the manager freely.

use super::clock::{Clock, MonotonicClock, VirtualClock};
use super::{Scheduler, Task, TimerHandle};
use log::trace;
use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

struct Entry {
    handle: TimerHandle,
    deadline: Instant,
    task: Task,
}

/// One-shot timer queue polled from the host's event loop.
pub struct TickScheduler<C: Clock = MonotonicClock> {
    clock: C,
    entries: RefCell<Vec<Entry>>,
    next_handle: Cell<u64>,
}

impl TickScheduler<MonotonicClock> {
    /// Creates a scheduler on the real monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for TickScheduler<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler<VirtualClock> {
    /// Advances the virtual clock and runs everything that came due.
    ///
    /// Returns the number of tasks fired.
    pub fn advance(&self, delta: Duration) -> usize {
        self.clock.advance(delta);
        self.run_due()
    }
}

impl<C: Clock> TickScheduler<C> {
    /// Creates a scheduler on the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            entries: RefCell::new(Vec::new()),
            next_handle: Cell::new(0),
        }
    }

    /// Returns the clock this scheduler reads.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns how many tasks are armed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Runs every task whose deadline has passed, earliest deadline first.
    ///
    /// Schedule order breaks ties. Tasks scheduled by a running task are
    /// themselves eligible in the same call if already due. Returns the
    /// number of tasks fired.
    pub fn run_due(&self) -> usize {
        let mut fired = 0;
        loop {
            let now = self.clock.now();
            let entry = {
                let mut entries = self.entries.borrow_mut();
                let due = entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.deadline <= now)
                    .min_by_key(|(_, entry)| entry.deadline)
                    .map(|(index, _)| index);
                match due {
                    Some(index) => entries.remove(index),
                    None => break,
                }
            };
            trace!("TickScheduler: firing {:?}", entry.handle);
            (entry.task)();
            fired += 1;
        }
        fired
    }
}

impl<C: Clock> Scheduler for TickScheduler<C> {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_handle.get());
        self.next_handle.set(self.next_handle.get() + 1);
        let deadline = self.clock.now() + delay;
        self.entries.borrow_mut().push(Entry {
            handle,
            deadline,
            task,
        });
        trace!("TickScheduler: armed {:?} for {:?}", handle, delay);
        handle
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let mut entries = self.entries.borrow_mut();
        if let Some(index) = entries.iter().position(|entry| entry.handle == handle) {
            entries.remove(index);
            trace!("TickScheduler: cancelled {:?}", handle);
            true
        } else {
            false
        }
    }
}
