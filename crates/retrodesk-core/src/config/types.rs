//! Configuration type definitions for retrodesk.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional so that layered files only override what they set;
//! the accessors in [`super::defaults`] supply the built-in values.
//!
//! # Example Configuration
//!
//! ```toml
//! [snap]
//! threshold_px = 24
//!
//! [stacking]
//! base_z_index = 100
//! maximized_z_index = 9999
//!
//! [animation]
//! minimize_hide_delay_ms = 300
//! restore_reflow_delay_ms = 10
//!
//! [viewport]
//! width = 1920
//! height = 1080
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.retrodesk/config.toml`
/// 2. Project config: `./.retrodesk/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeskConfig {
    /// Edge snapping while dragging
    #[serde(default)]
    pub snap: SnapSettings,

    /// Z-index assignment
    #[serde(default)]
    pub stacking: StackingSettings,

    /// Delays used to sequence minimize/restore transitions
    #[serde(default)]
    pub animation: AnimationSettings,

    /// Initial viewport size (replaced on resize)
    #[serde(default)]
    pub viewport: ViewportSettings,

    /// Size given to newly mounted window frames
    #[serde(default)]
    pub window: WindowSettings,
}

/// Edge snapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SnapSettings {
    /// Distance in pixels from an edge below which a dragged window snaps.
    /// Default: 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_px: Option<f64>,
}

/// Stacking order configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StackingSettings {
    /// Counter value before the first bring-to-front. Default: 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_z_index: Option<u32>,

    /// Z-index pinned on maximized windows. Default: 9999.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximized_z_index: Option<u32>,
}

/// Minimize/restore sequencing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnimationSettings {
    /// Delay before a minimized window becomes fully hidden. Default: 300ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimize_hide_delay_ms: Option<u64>,

    /// Delay before a restored window drops its minimized class. Default: 10ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_reflow_delay_ms: Option<u64>,
}

/// Viewport size configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ViewportSettings {
    /// Default: 1280.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Default: 800.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Window frame configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WindowSettings {
    /// Default: 480.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,

    /// Default: 360.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
}
