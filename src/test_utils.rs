// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit and integration tests.
//!
//! The recorder captures the snapshots a manager hands to its listeners so
//! tests can assert on the exact sequence of change notifications.

use crate::toast::Toast;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every snapshot a manager emits to its listeners.
#[derive(Clone, Default)]
pub struct ChangeRecorder {
    snapshots: Rc<RefCell<Vec<Vec<Toast>>>>,
}

impl ChangeRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a listener that appends each snapshot to this recorder.
    pub fn listener(&self) -> impl Fn(&[Toast]) + 'static {
        let snapshots = Rc::clone(&self.snapshots);
        move |toasts: &[Toast]| snapshots.borrow_mut().push(toasts.to_vec())
    }

    /// Returns how many notifications were observed.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Returns the length of each observed snapshot, in order.
    #[must_use]
    pub fn snapshot_sizes(&self) -> Vec<usize> {
        self.snapshots.borrow().iter().map(Vec::len).collect()
    }

    /// Returns the messages of the most recent snapshot.
    #[must_use]
    pub fn last_messages(&self) -> Vec<String> {
        self.snapshots
            .borrow()
            .last()
            .map(|snapshot| {
                snapshot
                    .iter()
                    .map(|toast| toast.message().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
