//! Configuration validation logic.

use crate::config::types::DeskConfig;
use crate::errors::ConfigError;

const MAX_BASE_Z_INDEX: u32 = u32::MAX / 2;

/// Validate a DeskConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Snap threshold must be a finite number greater than 0
/// - Base z-index must leave headroom (at most `u32::MAX / 2`)
/// - Maximized z-index must be above the base z-index
/// - Viewport and default window dimensions must be finite and positive
pub fn validate_config(config: &DeskConfig) -> Result<(), ConfigError> {
    let threshold = config.snap.threshold_px();
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("snap.threshold_px must be greater than 0, got {}", threshold),
        });
    }

    let base = config.stacking.base_z_index();
    let maximized = config.stacking.maximized_z_index();
    if base > MAX_BASE_Z_INDEX {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "stacking.base_z_index must be at most {}, got {}",
                MAX_BASE_Z_INDEX, base
            ),
        });
    }
    if maximized <= base {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "stacking.maximized_z_index ({}) must be greater than stacking.base_z_index ({})",
                maximized, base
            ),
        });
    }

    let dimensions = [
        ("viewport.width", config.viewport.width()),
        ("viewport.height", config.viewport.height()),
        ("window.default_width", config.window.default_width()),
        ("window.default_height", config.window.default_height()),
    ];
    for (name, value) in dimensions {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than 0, got {}", name, value),
            });
        }
    }

    Ok(())
}
