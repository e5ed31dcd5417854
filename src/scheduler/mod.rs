// SPDX-License-Identifier: MPL-2.0
//! Timer scheduling port.
//!
//! This module defines the [`Scheduler`] trait the manager uses to arm and
//! cancel one-shot auto-dismiss timers. Two implementations ship with the
//! crate: [`TickScheduler`] for hosts that poll from their own periodic tick
//! (deterministic under a [`VirtualClock`]), and [`TokioScheduler`] for
//! current-thread tokio hosts.
//!
//! # Single-threaded contract
//!
//! Schedulers run tasks on the host's event loop, never on a background
//! thread, so there is no `Send` bound on tasks and no locking anywhere.

pub mod clock;
pub mod tick;
pub mod tokio;

pub use clock::{Clock, MonotonicClock, VirtualClock};
pub use tick::TickScheduler;
pub use self::tokio::TokioScheduler;

use std::time::Duration;

// =============================================================================
// Task and TimerHandle
// =============================================================================

/// Deferred work a scheduler runs at most once.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Opaque handle to a scheduled task, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a raw id. Only scheduler implementations should mint handles.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id backing this handle.
    #[must_use]
    pub fn into_raw(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Scheduler Trait
// =============================================================================

/// Port for arming one-shot timers.
///
/// The manager never sleeps or spawns on its own; it hands every deferred
/// dismissal to a `Scheduler` and keeps the returned handle so a manual
/// removal can cancel the pending task.
///
/// # Example
///
/// ```ignore
/// use toast_tray::scheduler::{Scheduler, TimerHandle};
/// use std::time::Duration;
///
/// fn arm(scheduler: &dyn Scheduler) -> TimerHandle {
///     scheduler.schedule(Duration::from_secs(5), Box::new(|| println!("expired")))
/// }
/// ```
pub trait Scheduler {
    /// Schedules `task` to run once after `delay`.
    ///
    /// The task never runs synchronously inside this call, even for a zero
    /// delay.
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;

    /// Cancels a pending task.
    ///
    /// Returns `true` if the handle was still pending. Cancelling a handle
    /// that already fired, was already cancelled, or was never issued is a
    /// no-op returning `false`.
    fn cancel(&self, handle: TimerHandle) -> bool;
}
