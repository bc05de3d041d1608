//! Configuration for vtcurses.
//!
//! This module provides:
//! - TOML configuration loading from `~/.vtcurses/config.toml`
//! - Screen dimensions from the `LINES` / `COLS` environment variables
//!
//! # Configuration File
//!
//! ```toml
//! [screen]
//! rows = 24
//! cols = 80
//!
//! [log]
//! level = "info"
//! file = "/tmp/vtcurses.log"
//! ```
//!
//! The environment wins over the file, and both fall back to 24x80. The
//! dimensions are read once at startup; there is no live resize handling.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// Default grid height
pub const DEFAULT_ROWS: u16 = 24;
/// Default grid width
pub const DEFAULT_COLS: u16 = 80;

/// Grid size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: u16,
    pub cols: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Dimensions {
    /// Apply `LINES` / `COLS` overrides read through `lookup`.
    ///
    /// Missing values keep the current size. Values that are not a positive
    /// integer are ignored with a warning.
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rows: parse_dimension("LINES", lookup("LINES")).unwrap_or(self.rows),
            cols: parse_dimension("COLS", lookup("COLS")).unwrap_or(self.cols),
        }
    }

    /// Dimensions from the process environment, defaulting to 24x80
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }
}

fn parse_dimension(name: &str, value: Option<String>) -> Option<u16> {
    let value = value?;
    match value.trim().parse::<u16>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            warn!("Ignoring invalid {}={:?}", name, value);
            None
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen settings
    pub screen: ScreenConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub rows: u16,
    pub cols: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. "info" or "vtcurses=debug"
    pub level: String,
    /// Log file; defaults to `~/.vtcurses/vtcurses.log`
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(content) => match Self::from_toml_str(&content) {
                        Ok(config) => return config,
                        Err(e) => warn!("{}: {}", path.display(), e),
                    },
                    Err(e) => warn!("Cannot read {}: {}", path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Parse configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get config directory path (~/.vtcurses)
    pub fn get_config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".vtcurses"))
    }

    /// Get config file path (~/.vtcurses/config.toml)
    pub fn get_config_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Log file path, explicit or under the config directory
    pub fn log_path(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .or_else(|| Self::get_config_dir().map(|dir| dir.join("vtcurses.log")))
            .unwrap_or_else(|| PathBuf::from("vtcurses.log"))
    }

    /// Screen size from the file settings, overridden by the environment
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions_with(|key| std::env::var(key).ok())
    }

    /// Like [`Config::dimensions`] with an injected environment lookup
    pub fn dimensions_with<F>(&self, lookup: F) -> Dimensions
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Dimensions {
            rows: if self.screen.rows > 0 { self.screen.rows } else { DEFAULT_ROWS },
            cols: if self.screen.cols > 0 { self.screen.cols } else { DEFAULT_COLS },
        };
        base.with_overrides(lookup)
    }
}
