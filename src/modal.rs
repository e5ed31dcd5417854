// SPDX-License-Identifier: MPL-2.0
//! Open/close state for modal dialogs.
//!
//! A thin state machine over [`Controlled<bool>`]: hosts either let the
//! modal own its flag or drive it themselves and react to intended changes.
//! Rendering, focus, and keyboard handling stay in the display layer.

use crate::controlled::Controlled;

/// Open/close state with optional host ownership.
#[derive(Debug)]
pub struct ModalState {
    open: Controlled<bool>,
}

impl ModalState {
    /// Creates self-owned state, closed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_open(false)
    }

    /// Creates self-owned state starting open or closed.
    #[must_use]
    pub fn with_default_open(open: bool) -> Self {
        Self {
            open: Controlled::internal(open),
        }
    }

    /// Creates host-owned state.
    ///
    /// `open`, `close`, and `toggle` only report the intended value through
    /// `on_change`; the host applies it via [`sync`](Self::sync).
    pub fn controlled(open: bool, on_change: impl Fn(&bool) + 'static) -> Self {
        Self {
            open: Controlled::external(open, on_change),
        }
    }

    /// Returns whether the modal is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// Opens the modal.
    pub fn open(&mut self) {
        self.open.set(true);
    }

    /// Closes the modal.
    pub fn close(&mut self) {
        self.open.set(false);
    }

    /// Flips the current state.
    pub fn toggle(&mut self) {
        let next = !self.is_open();
        self.open.set(next);
    }

    /// Feeds the host's current value back in (host-owned mode only).
    pub fn sync(&mut self, open: bool) {
        self.open.sync(open);
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_closed_by_default() {
        assert!(!ModalState::new().is_open());
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn with_default_open_starts_open() {
        assert!(ModalState::with_default_open(true).is_open());
    }

    #[test]
    fn open_close_toggle_cycle() {
        let mut modal = ModalState::new();

        modal.open();
        assert!(modal.is_open());

        modal.close();
        assert!(!modal.is_open());

        modal.toggle();
        assert!(modal.is_open());
        modal.toggle();
        assert!(!modal.is_open());
    }

    #[test]
    fn controlled_reports_without_flipping() {
        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        let mut modal = ModalState::controlled(false, move |next: &bool| sink.set(Some(*next)));

        modal.open();
        assert_eq!(reported.get(), Some(true));
        assert!(!modal.is_open());

        modal.toggle();
        // Still asking to open; the host never applied the first request.
        assert_eq!(reported.get(), Some(true));
    }

    #[test]
    fn sync_applies_the_host_decision() {
        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        let mut modal = ModalState::controlled(false, move |next: &bool| sink.set(Some(*next)));

        modal.open();
        modal.sync(true);
        assert!(modal.is_open());

        modal.toggle();
        assert_eq!(reported.get(), Some(false));
    }
}
