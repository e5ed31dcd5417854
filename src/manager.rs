// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the ordered toast list, mints ids, arms one-shot
//! auto-dismiss timers through its [`Scheduler`], and notifies subscribed
//! listeners with a fresh snapshot after every effective change.

use crate::config::{ToastConfig, ToastPosition};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::toast::{Toast, ToastId, ToastRequest, Variant};
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

type ChangeListener = Rc<dyn Fn(&[Toast])>;

struct Inner {
    /// Toasts in insertion order, oldest first.
    toasts: Vec<Toast>,
    /// Pending auto-dismiss timers; every key is present in `toasts`.
    timers: HashMap<ToastId, TimerHandle>,
    next_id: u64,
    default_duration: Duration,
    position: ToastPosition,
    listeners: Vec<ChangeListener>,
}

/// Single-threaded toast store with timed auto-dismiss.
///
/// Cloning yields another handle to the same store; clones share the list,
/// the id counter, and the scheduler. Timer tasks hold only a weak reference,
/// so dropping every handle drops the store even with timers still armed.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use std::time::Duration;
/// use toast_tray::config::ToastConfig;
/// use toast_tray::manager::ToastManager;
/// use toast_tray::scheduler::{TickScheduler, VirtualClock};
///
/// let scheduler = Rc::new(TickScheduler::with_clock(VirtualClock::new()));
/// let manager = ToastManager::new(ToastConfig::default(), scheduler.clone());
///
/// let id = manager.error("Upload failed");
/// assert_eq!(manager.list()[0].id(), id);
///
/// manager.remove(id);
/// assert!(manager.is_empty());
/// ```
#[derive(Clone)]
pub struct ToastManager {
    inner: Rc<RefCell<Inner>>,
    scheduler: Rc<dyn Scheduler>,
}

impl ToastManager {
    /// Creates a manager over the given scheduler.
    #[must_use]
    pub fn new(config: ToastConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                toasts: Vec::new(),
                timers: HashMap::new(),
                next_id: 0,
                default_duration: config.default_duration(),
                position: config.position,
                listeners: Vec::new(),
            })),
            scheduler,
        }
    }

    /// Adds a toast and returns its id.
    ///
    /// The request's duration override, or the configured default, decides
    /// auto-dismissal; a resolved duration of zero means the toast stays
    /// until [`remove`](Self::remove) is called.
    pub fn add(&self, request: impl Into<ToastRequest>) -> ToastId {
        let request = request.into();
        let (id, variant, duration) = {
            let mut inner = self.inner.borrow_mut();
            let id = ToastId::new(inner.next_id);
            inner.next_id += 1;
            let toast = Toast::from_request(id, request, inner.default_duration);
            let variant = toast.variant();
            let duration = toast.duration();
            inner.toasts.push(toast);
            (id, variant, duration)
        };

        if !duration.is_zero() {
            let weak = Rc::downgrade(&self.inner);
            let handle = self
                .scheduler
                .schedule(duration, Box::new(move || expire(&weak, id)));
            self.inner.borrow_mut().timers.insert(id, handle);
        }

        debug!("ToastManager: added {} as {} ({:?})", id, variant, duration);
        notify_listeners(&self.inner);
        id
    }

    /// Adds a toast with the request's own variant (primary by default).
    pub fn notify(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.add(request)
    }

    /// Adds a success toast; any variant on the request is overridden.
    pub fn success(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.add(request.into().variant(Variant::Success))
    }

    /// Adds an error toast, shown with the danger variant.
    pub fn error(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.add(request.into().variant(Variant::Danger))
    }

    /// Adds a warning toast; any variant on the request is overridden.
    pub fn warning(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.add(request.into().variant(Variant::Warning))
    }

    /// Adds an info toast; any variant on the request is overridden.
    pub fn info(&self, request: impl Into<ToastRequest>) -> ToastId {
        self.add(request.into().variant(Variant::Info))
    }

    /// Removes a toast, cancelling its pending timer.
    ///
    /// Returns `true` if the toast was present. Removing an unknown or
    /// already-removed id is a no-op; listeners are not notified in that
    /// case.
    pub fn remove(&self, id: ToastId) -> bool {
        let (removed, handle) = {
            let mut inner = self.inner.borrow_mut();
            let handle = inner.timers.remove(&id);
            match inner.toasts.iter().position(|toast| toast.id() == id) {
                Some(index) => {
                    inner.toasts.remove(index);
                    (true, handle)
                }
                None => (false, handle),
            }
        };

        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
        if removed {
            debug!("ToastManager: removed {}", id);
            notify_listeners(&self.inner);
        }
        removed
    }

    /// Returns a snapshot of the toasts in insertion order, oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<Toast> {
        self.inner.borrow().toasts.clone()
    }

    /// Returns the number of toasts currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().toasts.len()
    }

    /// Returns whether the store holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().toasts.is_empty()
    }

    /// Removes every toast and cancels every pending timer.
    pub fn clear(&self) {
        let (had_toasts, handles) = {
            let mut inner = self.inner.borrow_mut();
            let had_toasts = !inner.toasts.is_empty();
            inner.toasts.clear();
            let handles: Vec<TimerHandle> =
                inner.timers.drain().map(|(_, handle)| handle).collect();
            (had_toasts, handles)
        };

        for handle in handles {
            self.scheduler.cancel(handle);
        }
        if had_toasts {
            debug!("ToastManager: cleared");
            notify_listeners(&self.inner);
        }
    }

    /// Returns the display position toasts anchor to.
    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.inner.borrow().position
    }

    /// Returns the duration applied when a request has no override.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.inner.borrow().default_duration
    }

    /// Registers a change listener and immediately feeds it the current
    /// snapshot.
    ///
    /// Listeners run after internal borrows are released, so they may call
    /// back into the manager. A listener that captures a clone of this
    /// manager forms a reference cycle that keeps the store alive for the
    /// rest of the process; prefer working from the snapshot argument.
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + 'static) {
        let listener: ChangeListener = Rc::new(listener);
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            inner.listeners.push(Rc::clone(&listener));
            inner.toasts.clone()
        };
        listener(&snapshot);
    }
}

impl fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ToastManager")
            .field("toasts", &inner.toasts.len())
            .field("pending_timers", &inner.timers.len())
            .finish_non_exhaustive()
    }
}

/// Timer-fire path. Holds only a weak reference so an armed timer never
/// keeps a dropped store alive.
fn expire(inner: &Weak<RefCell<Inner>>, id: ToastId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let removed = {
        let mut guard = inner.borrow_mut();
        guard.timers.remove(&id);
        match guard.toasts.iter().position(|toast| toast.id() == id) {
            Some(index) => {
                guard.toasts.remove(index);
                true
            }
            // Already removed by hand; a stale fire is a silent no-op.
            None => false,
        }
    };

    if removed {
        debug!("ToastManager: auto-dismissed {}", id);
        notify_listeners(&inner);
    }
}

fn notify_listeners(inner: &Rc<RefCell<Inner>>) {
    let (listeners, snapshot) = {
        let guard = inner.borrow();
        (guard.listeners.clone(), guard.toasts.clone())
    };
    for listener in listeners {
        listener(&snapshot);
    }
}
