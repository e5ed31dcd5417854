// SPDX-License-Identifier: MPL-2.0
//! `toast_tray` is a toast notification subsystem for single-threaded,
//! event-loop-driven applications.
//!
//! A [`ToastManager`] owns an ordered list of toasts, mints unique ids, and
//! arms one-shot auto-dismiss timers through a pluggable [`Scheduler`].
//! Hosts subscribe for change notifications and render the snapshots however
//! they like; BEM class helpers keep the markup contract in one place.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use toast_tray::config::ToastConfig;
//! use toast_tray::manager::ToastManager;
//! use toast_tray::scheduler::{TickScheduler, VirtualClock};
//!
//! let scheduler = Rc::new(TickScheduler::with_clock(VirtualClock::new()));
//! let manager = ToastManager::new(ToastConfig::default(), scheduler.clone());
//!
//! manager.success("Saved");
//! assert_eq!(manager.len(), 1);
//!
//! // The configured default is five seconds; once it elapses the toast
//! // dismisses itself.
//! scheduler.advance(Duration::from_millis(5000));
//! assert!(manager.is_empty());
//! ```

#![doc(html_root_url = "https://docs.rs/toast_tray/0.1.0")]

pub mod class_names;
pub mod config;
pub mod controlled;
pub mod error;
pub mod manager;
pub mod modal;
pub mod scheduler;
pub mod test_utils;
pub mod toast;

pub use config::{ToastConfig, ToastPosition};
pub use controlled::Controlled;
pub use error::{Error, Result};
pub use manager::ToastManager;
pub use modal::ModalState;
pub use scheduler::{
    Clock, MonotonicClock, Scheduler, Task, TickScheduler, TimerHandle, TokioScheduler,
    VirtualClock,
};
pub use toast::{Toast, ToastId, ToastRequest, Variant};
