//! Settings management.

use std::path::Path;

use super::{
    ConfigError,
    LocaleContext,
    TranslatableSettings,
    loader,
};

/// Holds validated fallback settings and hands out per-request locale contexts.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current, always valid, settings
    settings: TranslatableSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the settings file from `dir`; no file means no fallback locales.
    ///
    /// # Errors
    /// The file cannot be read or parsed, or names an unusable locale.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self { settings: loader::load_settings(dir)? })
    }

    /// Replaces the settings; invalid settings leave the current ones in place.
    ///
    /// # Errors
    /// `ConfigError::InvalidSettings` listing every unusable locale.
    pub fn set_settings(&mut self, settings: TranslatableSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::InvalidSettings)?;

        tracing::debug!(?settings, "Fallback settings updated");
        self.settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn settings(&self) -> &TranslatableSettings {
        &self.settings
    }

    /// Builds the context for a request running in `locale`.
    #[must_use]
    pub fn locale_context(&self, locale: impl Into<String>) -> LocaleContext {
        LocaleContext::new(locale, self.settings.clone())
    }
}
