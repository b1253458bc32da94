//! Per-record configuration of translatable keys and locales.

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    Result,
    TranslatableError,
};
use crate::key::split_locale_suffix;

/// Which logical attributes of a record are translated, and which locales count as present.
///
/// Both lists keep insertion order and drop duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "SchemaDef")]
pub struct TranslatableSchema {
    /// Logical keys stored as `{key}_{locale}` columns
    keys: Vec<String>,
    /// Locale suffixes considered present for fallback purposes
    locales: Vec<String>,
}

impl TranslatableSchema {
    #[must_use]
    pub fn new<K, L>(keys: K, locales: L) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let mut schema = Self::default();
        schema.set_translatable_keys(keys).set_translatable_locales(locales);
        schema
    }

    /// Replaces the translatable keys.
    pub fn set_translatable_keys<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.keys = dedup_ordered(keys);
        self
    }

    /// Replaces the recognised locales.
    pub fn set_translatable_locales<I>(&mut self, locales: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.locales = dedup_ordered(locales);
        self
    }

    #[must_use]
    pub fn translatable_attributes(&self) -> &[String] {
        &self.keys
    }

    /// Locales treated as having data for `key`.
    ///
    /// Driven by configuration only; the stored values are not inspected.
    #[must_use]
    pub fn translated_locales(&self, _key: &str) -> &[String] {
        &self.locales
    }

    #[must_use]
    pub fn is_translatable(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Returns `(logical_key, locale)` if `raw_key` looks like `{translatable}_{xx}`.
    #[must_use]
    pub fn locale_suffixed_attribute<'a>(&self, raw_key: &'a str) -> Option<(&'a str, &'a str)> {
        split_locale_suffix(raw_key).filter(|(base, _)| self.is_translatable(base))
    }

    #[must_use]
    pub fn is_locale_suffixed_attribute(&self, raw_key: &str) -> bool {
        self.locale_suffixed_attribute(raw_key).is_some()
    }

    /// Fails with [`TranslatableError::AttributeNotTranslatable`] for unknown keys.
    pub fn guard(&self, key: &str) -> Result<()> {
        if self.is_translatable(key) {
            return Ok(());
        }

        tracing::warn!(key, "Rejected access to a non-translatable attribute");
        Err(TranslatableError::not_translatable(key, &self.keys))
    }
}

/// Wire form of [`TranslatableSchema`], normalised on conversion.
#[derive(Default, Deserialize)]
#[serde(default)]
struct SchemaDef {
    /// Raw key list
    keys: Vec<String>,
    /// Raw locale list
    locales: Vec<String>,
}

impl From<SchemaDef> for TranslatableSchema {
    fn from(def: SchemaDef) -> Self {
        Self::new(def.keys, def.locales)
    }
}

/// Collects into a `Vec`, keeping the first occurrence of each item.
fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut result: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}
