//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    TranslatableSettings,
};

/// Name of the settings file looked up in a configuration directory.
pub(super) const CONFIG_FILE_NAME: &str = ".translatable-columns.json";

/// Reads and validates `.translatable-columns.json` in `dir`.
///
/// A missing file yields the default settings, so an application without one runs with
/// no fallback locales.
pub(super) fn load_settings(dir: &Path) -> Result<TranslatableSettings, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(TranslatableSettings::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
    let settings: TranslatableSettings = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
    settings.validate().map_err(ConfigError::InvalidSettings)?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded fallback settings");
    Ok(settings)
}
