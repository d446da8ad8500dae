//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.retrodesk/config.toml`
//! 3. **Project config** - `./.retrodesk/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{
    AnimationSettings, DeskConfig, SnapSettings, StackingSettings, ViewportSettings,
    WindowSettings,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".retrodesk";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DeskConfig, ConfigError> {
    let user_path = user_config_path().ok();
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(user_path.as_deref(), Some(&project_path))
}

/// Load and merge the given user and project config files.
///
/// Either path may be absent, or point at a file that does not exist.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<DeskConfig, ConfigError> {
    let mut config = DeskConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        match load_config_file(path) {
            Ok(layer) => config = merge_configs(config, layer),
            Err(ConfigError::ConfigNotFound { path }) => {
                debug!(event = "core.config.file_missing", path = %path);
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Location of the user config file, if a home directory is known.
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or(ConfigError::HomeDirectoryNotFound)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<DeskConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Every field is optional, so an override only replaces what it sets.
pub fn merge_configs(base: DeskConfig, override_config: DeskConfig) -> DeskConfig {
    DeskConfig {
        snap: SnapSettings {
            threshold_px: override_config.snap.threshold_px.or(base.snap.threshold_px),
        },
        stacking: StackingSettings {
            base_z_index: override_config
                .stacking
                .base_z_index
                .or(base.stacking.base_z_index),
            maximized_z_index: override_config
                .stacking
                .maximized_z_index
                .or(base.stacking.maximized_z_index),
        },
        animation: AnimationSettings {
            minimize_hide_delay_ms: override_config
                .animation
                .minimize_hide_delay_ms
                .or(base.animation.minimize_hide_delay_ms),
            restore_reflow_delay_ms: override_config
                .animation
                .restore_reflow_delay_ms
                .or(base.animation.restore_reflow_delay_ms),
        },
        viewport: ViewportSettings {
            width: override_config.viewport.width.or(base.viewport.width),
            height: override_config.viewport.height.or(base.viewport.height),
        },
        window: WindowSettings {
            default_width: override_config
                .window
                .default_width
                .or(base.window.default_width),
            default_height: override_config
                .window
                .default_height
                .or(base.window.default_height),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from_paths(
            Some(&dir.path().join("nope.toml")),
            Some(&dir.path().join("also-nope.toml")),
        )
        .unwrap();
        assert_eq!(config, DeskConfig::default());
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let dir = TempDir::new().unwrap();
        let user = write_config(
            &dir,
            "user.toml",
            r#"
[snap]
threshold_px = 30.0

[viewport]
width = 1920.0
height = 1080.0
"#,
        );
        let project = write_config(
            &dir,
            "project.toml",
            r#"
[viewport]
width = 1024.0

[animation]
minimize_hide_delay_ms = 150
"#,
        );

        let config = load_from_paths(Some(&user), Some(&project)).unwrap();
        assert_eq!(config.snap.threshold_px(), 30.0); // From user
        assert_eq!(config.viewport.width(), 1024.0); // Overridden by project
        assert_eq!(config.viewport.height(), 1080.0); // From user
        assert_eq!(config.animation.minimize_hide_delay_ms(), 150);
        assert_eq!(config.animation.restore_reflow_delay_ms(), 10);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let broken = write_config(&dir, "broken.toml", "invalid toml [[[");

        let err = load_from_paths(None, Some(&broken)).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_invalid_merged_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let project = write_config(
            &dir,
            "project.toml",
            r#"
[stacking]
base_z_index = 10000
"#,
        );

        let err = load_from_paths(None, Some(&project)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_config_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let base: DeskConfig = toml::from_str(
            r#"
[stacking]
base_z_index = 50
maximized_z_index = 5000
"#,
        )
        .unwrap();
        let merged = merge_configs(base, DeskConfig::default());
        assert_eq!(merged.stacking.base_z_index(), 50);
        assert_eq!(merged.stacking.maximized_z_index(), 5000);
    }
}
