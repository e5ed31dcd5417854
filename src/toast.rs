// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record and `Variant` enum used throughout
//! the notification system, plus the `ToastRequest` builder that callers hand
//! to [`ToastManager::add`](crate::manager::ToastManager::add).

use crate::class_names::{bem_modifier, cn};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Ids are minted by the owning manager from a monotonically increasing
/// counter and are never reused within that manager's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual intent of a toast (color and icon family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral brand styling.
    #[default]
    Primary,
    /// Muted secondary styling.
    Secondary,
    /// Operation completed successfully (green).
    Success,
    /// Something failed and needs attention (red).
    Danger,
    /// Caution that does not block the operation (orange).
    Warning,
    /// Informational message (blue).
    Info,
    /// Light styling for dark surfaces.
    Light,
    /// Dark styling for light surfaces.
    Dark,
}

impl Variant {
    /// Returns the kebab-case name used in class strings.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }

    /// BEM modifier class for this variant, e.g. `toast--success`.
    #[must_use]
    pub fn css_class(&self) -> String {
        bem_modifier("toast", self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification held by the manager.
///
/// Records are immutable once added; the duration has already been resolved
/// against the manager's default. `Duration::ZERO` marks a sticky toast that
/// stays until manually removed.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    variant: Variant,
    title: Option<String>,
    message: String,
    duration: Duration,
    icon: Option<String>,
}

impl Toast {
    pub(crate) fn from_request(
        id: ToastId,
        request: ToastRequest,
        default_duration: Duration,
    ) -> Self {
        Self {
            id,
            variant: request.variant,
            title: request.title,
            message: request.message,
            duration: request.duration.unwrap_or(default_duration),
            icon: request.icon,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the visual variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the optional heading shown above the message.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the body text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the resolved auto-dismiss duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the optional icon name.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns whether this toast stays until manually removed.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    /// Class string for the toast card, e.g. `toast toast-fade-in toast--danger`.
    #[must_use]
    pub fn css_classes(&self) -> String {
        let modifier = self.variant.css_class();
        cn([Some("toast"), Some("toast-fade-in"), Some(modifier.as_str())])
    }
}

/// Builder for adding a toast.
///
/// Only the message is required; everything else falls back to manager
/// defaults. A plain `&str` or `String` converts into a request, so simple
/// call sites stay simple.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    message: String,
    variant: Variant,
    title: Option<String>,
    duration: Option<Duration>,
    icon: Option<String>,
}

impl ToastRequest {
    /// Creates a request with the given message and default styling.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the visual variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the heading shown above the message.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the manager's default auto-dismiss duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast until it is manually removed.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }

    /// Sets the icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl From<&str> for ToastRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToastRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
