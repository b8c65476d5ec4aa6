//! Settings loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::settings::PluginSettings;

/// Loads and validates plugin settings from a `weft.toml` file.
pub fn load_settings(path: &Path) -> Result<PluginSettings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_settings_from_str(&content)
}

/// Parses and validates plugin settings from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_settings_from_str(content: &str) -> Result<PluginSettings, ConfigError> {
    let settings: PluginSettings =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Checks that filter lists are usable before the plugin registers hooks.
fn validate_settings(settings: &PluginSettings) -> Result<(), ConfigError> {
    if settings.include.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "include".to_string(),
            reason: "at least one component extension is required".to_string(),
        });
    }
    for ext in &settings.include {
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "include".to_string(),
                reason: format!("`{ext}` is not a bare extension"),
            });
        }
    }
    for suffix in &settings.module_suffixes {
        if suffix.is_empty() || suffix.starts_with('.') || suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "module_suffixes".to_string(),
                reason: format!("`{suffix}` is not a bare suffix"),
            });
        }
    }
    for dir in &settings.vendor_dirs {
        if dir.is_empty() || dir.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "vendor_dirs".to_string(),
                reason: format!("`{dir}` is not a bare directory name"),
            });
        }
    }
    Ok(())
}
