//! Locale resolution and translation lookup over an attribute store.
//!
//! [`TranslationResolver`] is the read path: it never mutates the store.
//! [`TranslationWriter`] adds the write path and is also what mutators receive.

use std::fmt;

use serde_json::Value;

use crate::config::LocaleContext;
use crate::error::Result;
use crate::event::{
    TranslationChanged,
    TranslationListener,
};
use crate::key::compose_key;
use crate::schema::TranslatableSchema;
use crate::store::AttributeStore;
use crate::transform::TransformRegistry;
use crate::types::{
    AttributeValue,
    Translations,
    empty_value,
    is_blank,
};

/// Read-only view of a record's translation configuration.
#[derive(Debug, Clone, Copy)]
pub struct TranslationResolver<'a> {
    schema: &'a TranslatableSchema,
    context: &'a LocaleContext,
    transforms: &'a TransformRegistry,
}

impl<'a> TranslationResolver<'a> {
    #[must_use]
    pub const fn new(
        schema: &'a TranslatableSchema,
        context: &'a LocaleContext,
        transforms: &'a TransformRegistry,
    ) -> Self {
        Self { schema, context, transforms }
    }

    #[must_use]
    pub const fn schema(&self) -> &'a TranslatableSchema {
        self.schema
    }

    #[must_use]
    pub const fn context(&self) -> &'a LocaleContext {
        self.context
    }

    /// Picks the locale to read `key` from.
    ///
    /// A locale listed in the schema is used as is. Otherwise, with fallback enabled, the
    /// package fallback locale and then the application fallback locale are tried.
    #[must_use]
    pub fn resolve_locale<'l>(&self, key: &str, locale: &'l str, use_fallback: bool) -> &'l str
    where
        'a: 'l,
    {
        if self.schema.translated_locales(key).iter().any(|l| l == locale) {
            return locale;
        }

        if !use_fallback {
            return locale;
        }

        if let Some(fallback) = self.context.fallback_locale() {
            tracing::trace!(key, locale, fallback, "Using package fallback locale");
            return fallback;
        }

        if let Some(fallback) = self.context.app_fallback_locale() {
            tracing::trace!(key, locale, fallback, "Using application fallback locale");
            return fallback;
        }

        locale
    }

    /// Returns the value of `key` in `locale`.
    ///
    /// With fallback enabled, a blank value (`null` or `""`) is replaced by the value in the
    /// active locale. That second lookup never falls back again.
    ///
    /// Only a missing column reads as `""`; a column holding `null` reads back as `null`.
    #[must_use]
    pub fn get_translation(
        &self,
        store: &dyn AttributeStore,
        key: &str,
        locale: &str,
        use_fallback: bool,
    ) -> AttributeValue {
        let locale = self.resolve_locale(key, locale, use_fallback);
        let localized_key = compose_key(key, locale);
        let translation = store.get(&localized_key).cloned().unwrap_or_else(empty_value);

        if let Some(accessor) =
            self.transforms.accessor(&localized_key).or_else(|| self.transforms.accessor(key))
        {
            return accessor(translation);
        }

        if !use_fallback || !is_blank(&translation) {
            return translation;
        }

        tracing::trace!(key, locale, active = %self.context.locale, "Blank translation, using active locale");
        self.get_translation(store, key, &self.context.locale, false)
    }

    /// Non-blank translations of `key`, in schema locale order.
    pub fn get_translations(&self, store: &dyn AttributeStore, key: &str) -> Result<Translations> {
        self.schema.guard(key)?;

        Ok(self
            .schema
            .translated_locales(key)
            .iter()
            .filter_map(|locale| {
                let translation = self.get_translation(store, key, locale, false);
                (!is_blank(&translation)).then(|| (locale.clone(), translation))
            })
            .collect())
    }

    /// Non-blank translations of every translatable key, keyed by logical key in schema order.
    #[must_use]
    pub fn all_translations(&self, store: &dyn AttributeStore) -> Translations {
        self.schema
            .translatable_attributes()
            .iter()
            .map(|key| {
                let translations = self.get_translations(store, key).unwrap_or_default();
                (key.clone(), Value::Object(translations))
            })
            .collect()
    }

    /// Whether `key` has a non-blank value in `locale`, or in the active locale when
    /// `locale` is `None` or empty.
    pub fn has_translation(
        &self,
        store: &dyn AttributeStore,
        key: &str,
        locale: Option<&str>,
    ) -> Result<bool> {
        let locale = locale.filter(|l| !l.is_empty()).unwrap_or(&self.context.locale);

        Ok(self.get_translations(store, key)?.contains_key(locale))
    }
}

/// Mutable view over a record's attributes, handed to mutators.
pub struct TranslationWriter<'a> {
    store: &'a mut dyn AttributeStore,
    resolver: TranslationResolver<'a>,
    listeners: &'a [Box<dyn TranslationListener>],
}

impl fmt::Debug for TranslationWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationWriter")
            .field("resolver", &self.resolver)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<'a> TranslationWriter<'a> {
    #[must_use]
    pub fn new(
        store: &'a mut dyn AttributeStore,
        resolver: TranslationResolver<'a>,
        listeners: &'a [Box<dyn TranslationListener>],
    ) -> Self {
        Self { store, resolver, listeners }
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &'a str {
        &self.resolver.context.locale
    }

    #[must_use]
    pub const fn resolver(&self) -> TranslationResolver<'a> {
        self.resolver
    }

    /// Raw access to a column.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.store.get(key)
    }

    /// Raw write to a column, bypassing mutators and listeners.
    pub fn set(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.store.set(key.into(), value);
    }

    /// Raw write to the `{key}_{locale}` column.
    pub fn set_localized(&mut self, key: &str, locale: &str, value: AttributeValue) {
        self.store.set(compose_key(key, locale), value);
    }

    /// Reads a translation with fallback, as the record would.
    #[must_use]
    pub fn translation(&self, key: &str, locale: &str) -> AttributeValue {
        self.resolver.get_translation(&*self.store, key, locale, true)
    }

    /// Stores `value` as the `locale` translation of `key`.
    ///
    /// A mutator registered for the composite key runs first, then one registered for the
    /// logical key. After each, the value found in the composite column is carried forward.
    /// Listeners are notified once the final value is stored.
    pub fn set_translation(&mut self, key: &str, locale: &str, value: AttributeValue) -> Result<()> {
        self.resolver.schema.guard(key)?;

        let localized_key = compose_key(key, locale);
        let old_value = self.store.get(&localized_key).cloned().unwrap_or_else(empty_value);

        let transforms = self.resolver.transforms;
        let mut value = value;
        for mutator_key in [localized_key.as_str(), key] {
            if let Some(mutator) = transforms.mutator(mutator_key) {
                tracing::trace!(key, locale, mutator = mutator_key, "Running mutator");
                mutator(&mut *self, value, locale);
                value = self.store.get(&localized_key).cloned().unwrap_or_else(empty_value);
            }
        }

        self.store.set(localized_key, value.clone());
        tracing::debug!(key, locale, "Translation set");

        let event = TranslationChanged {
            key: key.to_string(),
            locale: locale.to_string(),
            old_value,
            new_value: value,
        };
        for listener in self.listeners {
            listener.translation_set(&*self.store, &event);
        }

        Ok(())
    }
}
