//! # Configuration System
//!
//! Hierarchical TOML configuration for the desktop.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.retrodesk/config.toml`
//! 3. **Project config** - `./.retrodesk/config.toml`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use retrodesk_core::config::DeskConfig;
//!
//! fn example() -> Result<(), retrodesk_core::errors::ConfigError> {
//!     let config = DeskConfig::load_hierarchy()?;
//!     let threshold = config.snap.threshold_px();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{
    AnimationSettings, DeskConfig, SnapSettings, StackingSettings, ViewportSettings,
    WindowSettings,
};
pub use validation::validate_config;

impl DeskConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
