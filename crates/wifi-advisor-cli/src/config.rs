//! Display configuration
//!
//! TOML-based settings for the terminal front end, with defaults.
//! Location: `<config dir>/wifi-advisor/config.toml`
//!
//! ```toml
//! colorblind = true
//! zoom_percent = 120
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Smallest zoom level.
pub const MIN_ZOOM_PERCENT: u16 = 50;

/// Largest zoom level.
pub const MAX_ZOOM_PERCENT: u16 = 200;

/// Zoom levels are multiples of this step.
pub const ZOOM_STEP_PERCENT: u16 = 10;

/// Presentation settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use the cyan/yellow palette instead of green/red.
    pub colorblind: bool,
    /// Scale applied to column width limits, in percent.
    pub zoom_percent: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colorblind: false,
            zoom_percent: 100,
        }
    }
}

impl DisplayConfig {
    /// Standard config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wifi-advisor").join("config.toml"))
    }

    /// Load from `path`, or from the standard location when `None`.
    ///
    /// An explicit path must exist. A missing file at the standard location
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Apply command-line flags on top of the file values.
    ///
    /// `--colorblind` can only switch the mode on; it has no negated form.
    pub fn with_overrides(mut self, colorblind: bool, zoom_percent: Option<u16>) -> Self {
        self.colorblind |= colorblind;
        if let Some(zoom) = zoom_percent {
            self.zoom_percent = zoom;
        }
        self.normalized()
    }

    /// Scale a base column width by the zoom level.
    pub fn scale(&self, base: usize) -> usize {
        (base * usize::from(self.zoom_percent) / 100).max(1)
    }

    fn normalized(mut self) -> Self {
        self.zoom_percent = normalize_zoom(self.zoom_percent);
        self
    }
}

/// Clamp to `50..=200` and round to the nearest step of 10.
pub fn normalize_zoom(percent: u16) -> u16 {
    let clamped = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
    (clamped + ZOOM_STEP_PERCENT / 2) / ZOOM_STEP_PERCENT * ZOOM_STEP_PERCENT
}
