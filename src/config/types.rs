use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::key::LOCALE_SEPARATOR;

/// A configured fallback locale that cannot be used as a column suffix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLocale {
    #[error("`{setting}` locale {locale:?} contains whitespace")]
    Whitespace { setting: &'static str, locale: String },

    #[error("`{setting}` locale {locale:?} contains `_`, which separates the attribute from the locale in column names")]
    Separator { setting: &'static str, locale: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Cannot parse settings file {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("Invalid fallback settings: {}", join_problems(.0))]
    InvalidSettings(Vec<InvalidLocale>),
}

/// One line for all problems, `; `-separated.
fn join_problems(problems: &[InvalidLocale]) -> String {
    problems.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Fallback locales consulted when a requested locale has no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatableSettings {
    /// Library-level fallback, tried first.
    ///
    /// `Some("")` counts as configured and wins over `app_fallback_locale`.
    pub fallback_locale: Option<String>,

    /// Application-level fallback, tried when `fallback_locale` is unset.
    pub app_fallback_locale: Option<String>,
}

impl TranslatableSettings {
    /// Checks that every configured locale can be appended to a column name.
    ///
    /// # Errors
    /// Every offending locale, in field order.
    pub fn validate(&self) -> Result<(), Vec<InvalidLocale>> {
        let problems: Vec<InvalidLocale> = [
            ("fallbackLocale", &self.fallback_locale),
            ("appFallbackLocale", &self.app_fallback_locale),
        ]
        .into_iter()
        .filter_map(|(setting, locale)| Some((setting, locale.as_deref()?)))
        .flat_map(|(setting, locale)| {
            let whitespace = locale
                .contains(char::is_whitespace)
                .then(|| InvalidLocale::Whitespace { setting, locale: locale.to_string() });
            let separator = locale
                .contains(LOCALE_SEPARATOR)
                .then(|| InvalidLocale::Separator { setting, locale: locale.to_string() });
            whitespace.into_iter().chain(separator)
        })
        .collect();

        if problems.is_empty() { Ok(()) } else { Err(problems) }
    }
}

/// The active locale and fallback settings of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleContext {
    /// Active application locale
    pub locale: String,
    pub fallback: TranslatableSettings,
}

impl LocaleContext {
    #[must_use]
    pub fn new(locale: impl Into<String>, fallback: TranslatableSettings) -> Self {
        Self { locale: locale.into(), fallback }
    }

    /// Same fallback settings with another active locale.
    #[must_use]
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), fallback: self.fallback.clone() }
    }

    #[must_use]
    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback.fallback_locale.as_deref()
    }

    #[must_use]
    pub fn app_fallback_locale(&self) -> Option<&str> {
        self.fallback.app_fallback_locale.as_deref()
    }
}
