//! Built-in configuration values.
//!
//! Config types keep every field optional; the accessors here resolve a
//! missing value to its default.

use crate::config::types::{
    AnimationSettings, SnapSettings, StackingSettings, ViewportSettings, WindowSettings,
};

/// Pixels from an edge that trigger a snap.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 20.0;

/// Counter value before the first bring-to-front.
pub const DEFAULT_BASE_Z_INDEX: u32 = 100;

/// Z-index pinned on maximized windows.
pub const DEFAULT_MAXIMIZED_Z_INDEX: u32 = 9999;

/// Matches the minimize transition duration.
pub const DEFAULT_MINIMIZE_HIDE_DELAY_MS: u64 = 300;

/// Gives layout one reflow before the minimized class is dropped.
pub const DEFAULT_RESTORE_REFLOW_DELAY_MS: u64 = 10;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

pub const DEFAULT_WINDOW_WIDTH: f64 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 360.0;

impl SnapSettings {
    /// Returns the snap threshold in pixels, defaulting to 20.
    pub fn threshold_px(&self) -> f64 {
        self.threshold_px.unwrap_or(DEFAULT_SNAP_THRESHOLD_PX)
    }
}

impl StackingSettings {
    /// Returns the base z-index, defaulting to 100.
    pub fn base_z_index(&self) -> u32 {
        self.base_z_index.unwrap_or(DEFAULT_BASE_Z_INDEX)
    }

    /// Returns the maximized z-index, defaulting to 9999.
    pub fn maximized_z_index(&self) -> u32 {
        self.maximized_z_index.unwrap_or(DEFAULT_MAXIMIZED_Z_INDEX)
    }
}

impl AnimationSettings {
    /// Returns the minimize hide delay, defaulting to 300ms.
    pub fn minimize_hide_delay_ms(&self) -> u64 {
        self.minimize_hide_delay_ms
            .unwrap_or(DEFAULT_MINIMIZE_HIDE_DELAY_MS)
    }

    /// Returns the restore reflow delay, defaulting to 10ms.
    pub fn restore_reflow_delay_ms(&self) -> u64 {
        self.restore_reflow_delay_ms
            .unwrap_or(DEFAULT_RESTORE_REFLOW_DELAY_MS)
    }
}

impl ViewportSettings {
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    pub fn height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl WindowSettings {
    pub fn default_width(&self) -> f64 {
        self.default_width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    pub fn default_height(&self) -> f64 {
        self.default_height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }
}
