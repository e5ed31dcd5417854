// SPDX-License-Identifier: MPL-2.0
//! Scheduler backed by tokio's timer wheel.
//!
//! For hosts that run a current-thread runtime. Tasks are spawned on the
//! local set, so the single-threaded contract of [`Scheduler`] holds and no
//! `Send` bound appears anywhere.

use super::{Scheduler, Task, TimerHandle};
use log::trace;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One-shot timers on `tokio::time`, spawned via `spawn_local`.
///
/// Must be used from within a [`tokio::task::LocalSet`]; `schedule` panics
/// outside one, matching `spawn_local`.
pub struct TokioScheduler {
    tasks: Rc<RefCell<HashMap<u64, JoinHandle<()>>>>,
    next_handle: Cell<u64>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Rc::new(RefCell::new(HashMap::new())),
            next_handle: Cell::new(0),
        }
    }

    /// Returns how many tasks are armed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let raw = self.next_handle.get();
        self.next_handle.set(raw + 1);

        let tasks = Rc::clone(&self.tasks);
        let join = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            // Drop our own bookkeeping entry before running, so a cancel
            // issued by the task itself is a clean no-op.
            tasks.borrow_mut().remove(&raw);
            task();
        });
        self.tasks.borrow_mut().insert(raw, join);

        trace!("TokioScheduler: armed {} for {:?}", raw, delay);
        TimerHandle::from_raw(raw)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        match self.tasks.borrow_mut().remove(&handle.into_raw()) {
            Some(join) => {
                join.abort();
                trace!("TokioScheduler: cancelled {}", handle.into_raw());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn scheduled_task_fires_after_delay() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                scheduler.schedule(Duration::from_millis(50), Box::new(move || flag.set(true)));
                assert_eq!(scheduler.pending(), 1);

                tokio::time::sleep(Duration::from_millis(49)).await;
                assert!(!fired.get());

                tokio::time::sleep(Duration::from_millis(2)).await;
                assert!(fired.get());
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_firing() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let handle =
                    scheduler.schedule(Duration::from_millis(30), Box::new(move || flag.set(true)));

                assert!(scheduler.cancel(handle));
                tokio::time::sleep(Duration::from_millis(100)).await;

                assert!(!fired.get());
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_is_a_noop() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let handle =
                    scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));

                tokio::time::sleep(Duration::from_millis(20)).await;
                assert!(fired.get());
                assert!(!scheduler.cancel(handle));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn handles_stay_distinct_across_schedules() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let first = scheduler.schedule(Duration::from_millis(10), Box::new(|| {}));
                let second = scheduler.schedule(Duration::from_millis(10), Box::new(|| {}));
                assert_ne!(first, second);

                tokio::time::sleep(Duration::from_millis(20)).await;
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }
}
