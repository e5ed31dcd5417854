// SPDX-License-Identifier: MPL-2.0
//! Internal vs external state ownership.
//!
//! Interactive components either own their state outright or mirror a value
//! the host owns and report intended changes through a callback. The enum
//! makes the two modes explicit instead of spreading `is_controlled` checks
//! through every method.

use std::fmt;
use std::rc::Rc;

/// State that is either self-owned or driven by the host.
pub enum Controlled<T> {
    /// The component owns the value; mutations apply directly.
    Internal(T),
    /// The host owns the value. Mutations only report the intended next
    /// value through `on_change`; [`sync`](Controlled::sync) feeds the
    /// host's decision back in.
    External {
        value: T,
        on_change: Rc<dyn Fn(&T)>,
    },
}

impl<T> Controlled<T> {
    /// Creates self-owned state starting at `initial`.
    pub fn internal(initial: T) -> Self {
        Controlled::Internal(initial)
    }

    /// Creates host-owned state currently at `value`.
    pub fn external(value: T, on_change: impl Fn(&T) + 'static) -> Self {
        Controlled::External {
            value,
            on_change: Rc::new(on_change),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> &T {
        match self {
            Controlled::Internal(value) => value,
            Controlled::External { value, .. } => value,
        }
    }

    /// Returns whether the host owns the value.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Controlled::External { .. })
    }

    /// Applies a change: stores it when internal, reports it when external.
    pub fn set(&mut self, next: T) {
        match self {
            Controlled::Internal(value) => *value = next,
            Controlled::External { on_change, .. } => on_change(&next),
        }
    }

    /// Feeds the host's current value back in. No-op for internal state.
    pub fn sync(&mut self, current: T) {
        if let Controlled::External { value, .. } = self {
            *value = current;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Controlled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controlled::Internal(value) => f.debug_tuple("Internal").field(value).finish(),
            Controlled::External { value, .. } => f
                .debug_struct("External")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn internal_state_stores_values() {
        let mut state = Controlled::internal(3);
        assert_eq!(*state.get(), 3);
        assert!(!state.is_external());

        state.set(7);
        assert_eq!(*state.get(), 7);
    }

    #[test]
    fn external_set_reports_without_storing() {
        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        let mut state = Controlled::external(false, move |next: &bool| sink.set(Some(*next)));

        state.set(true);
        assert_eq!(reported.get(), Some(true));
        // The host has not accepted the change yet.
        assert!(!*state.get());
        assert!(state.is_external());
    }

    #[test]
    fn external_sync_applies_the_host_decision() {
        let mut state = Controlled::external(false, |_: &bool| {});
        state.sync(true);
        assert!(*state.get());
    }

    #[test]
    fn sync_is_a_noop_for_internal_state() {
        let mut state = Controlled::internal(1);
        state.sync(9);
        assert_eq!(*state.get(), 1);
    }

    #[test]
    fn debug_formats_both_modes() {
        let internal = Controlled::internal(5);
        assert_eq!(format!("{:?}", internal), "Internal(5)");

        let external = Controlled::external(5, |_: &i32| {});
        let rendered = format!("{:?}", external);
        assert!(rendered.contains("External"));
        assert!(rendered.contains("value: 5"));
    }
}
