//! Store configuration: display position and the default auto-dismiss
//! duration, with TOML persistence for hosts that keep user preferences
//! in a settings file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_tray::config::{self, ToastConfig, ToastPosition};
//! use std::path::Path;
//!
//! // Load existing configuration, falling back to defaults
//! let mut config = config::load_from_path(Path::new("toast.toml")).unwrap_or_default();
//!
//! // Modify a setting
//! config.position = ToastPosition::BottomCenter;
//!
//! // Save the modified configuration
//! config::save_to_path(&config, Path::new("toast.toml")).expect("Failed to save config");
//! ```

use crate::class_names::{bem_modifier, cn};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Auto-dismiss duration applied when neither the request nor the host
/// configuration says otherwise.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Screen corner or edge the toast container anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    TopCenter,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl ToastPosition {
    /// Returns the kebab-case name used in class strings and TOML files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }

    /// Class string for the positioned container element, e.g.
    /// `toast-container toast-container--top-right`.
    #[must_use]
    pub fn container_classes(&self) -> String {
        let modifier = bem_modifier("toast-container", self.as_str());
        cn([Some("toast-container"), Some(modifier.as_str())])
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub position: ToastPosition,
    /// Milliseconds; `0` means toasts never dismiss on their own.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl ToastConfig {
    /// Returns the configured default duration as a [`Duration`].
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = ToastConfig {
            position: ToastPosition::BottomLeft,
            default_duration_ms: 2500,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.position, config.position);
        assert_eq!(loaded.default_duration_ms, config.default_duration_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.position, ToastPosition::TopRight);
        assert_eq!(loaded.default_duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn load_from_path_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist.toml");

        assert!(load_from_path(&missing).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("toast.toml");

        save_to_path(&ToastConfig::default(), &config_path)
            .expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn partial_file_fills_missing_fields_from_defaults() {
        let config: ToastConfig =
            toml::from_str("position = \"bottom-center\"").expect("partial config should parse");

        assert_eq!(config.position, ToastPosition::BottomCenter);
        assert_eq!(config.default_duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn default_config_anchors_top_right_at_five_seconds() {
        let config = ToastConfig::default();
        assert_eq!(config.position, ToastPosition::TopRight);
        assert_eq!(config.default_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn zero_duration_config_means_sticky_toasts() {
        let config = ToastConfig {
            default_duration_ms: 0,
            ..ToastConfig::default()
        };
        assert!(config.default_duration().is_zero());
    }

    #[test]
    fn position_names_are_kebab_case() {
        assert_eq!(ToastPosition::TopRight.as_str(), "top-right");
        assert_eq!(ToastPosition::BottomCenter.as_str(), "bottom-center");
        assert_eq!(format!("{}", ToastPosition::TopCenter), "top-center");
    }

    #[test]
    fn container_classes_carry_position_modifier() {
        assert_eq!(
            ToastPosition::TopRight.container_classes(),
            "toast-container toast-container--top-right"
        );
        assert_eq!(
            ToastPosition::BottomLeft.container_classes(),
            "toast-container toast-container--bottom-left"
        );
    }
}
