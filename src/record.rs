//! Translation-aware record wrapper.
//!
//! The host's field access calls [`TranslatableRecord::get_attribute`] and
//! [`TranslatableRecord::set_attribute`] explicitly; translatable keys are routed to their
//! locale columns, everything else passes through to the attribute store.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::LocaleContext;
use crate::error::Result;
use crate::event::TranslationListener;
use crate::key::compose_key;
use crate::resolver::{
    TranslationResolver,
    TranslationWriter,
};
use crate::schema::TranslatableSchema;
use crate::store::{
    AttributeBag,
    AttributeStore,
};
use crate::transform::TransformRegistry;
use crate::types::{
    AttributeValue,
    Translations,
};

/// A record whose translatable attributes live in `{key}_{locale}` columns.
pub struct TranslatableRecord<S = AttributeBag> {
    schema: TranslatableSchema,
    attributes: S,
    transforms: Arc<TransformRegistry>,
    listeners: Vec<Box<dyn TranslationListener>>,
}

impl TranslatableRecord {
    /// Creates a record with no attributes.
    #[must_use]
    pub fn new(schema: TranslatableSchema) -> Self {
        Self::with_attributes(schema, AttributeBag::new())
    }
}

impl<S: AttributeStore> TranslatableRecord<S> {
    /// Wraps existing attributes, e.g. a row loaded by the host.
    #[must_use]
    pub fn with_attributes(schema: TranslatableSchema, attributes: S) -> Self {
        Self {
            schema,
            attributes,
            transforms: Arc::new(TransformRegistry::new()),
            listeners: Vec::new(),
        }
    }

    /// Uses the accessors and mutators of the record type.
    #[must_use]
    pub fn with_transforms(mut self, transforms: Arc<TransformRegistry>) -> Self {
        self.transforms = transforms;
        self
    }

    /// Registers a listener notified after every translation write.
    pub fn listen(&mut self, listener: impl TranslationListener + 'static) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &TranslatableSchema {
        &self.schema
    }

    #[must_use]
    pub const fn attributes(&self) -> &S {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut S {
        &mut self.attributes
    }

    #[must_use]
    pub fn into_attributes(self) -> S {
        self.attributes
    }

    pub fn set_translatable_keys<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.schema.set_translatable_keys(keys);
        self
    }

    pub fn set_translatable_locales<I>(&mut self, locales: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.schema.set_translatable_locales(locales);
        self
    }

    #[must_use]
    pub fn get_translatable_attributes(&self) -> &[String] {
        self.schema.translatable_attributes()
    }

    #[must_use]
    pub fn get_translated_locales(&self, key: &str) -> &[String] {
        self.schema.translated_locales(key)
    }

    #[must_use]
    pub fn is_translatable_attribute(&self, key: &str) -> bool {
        self.schema.is_translatable(key)
    }

    #[must_use]
    pub fn is_translatable_locale_attribute(&self, key: &str) -> bool {
        self.schema.is_locale_suffixed_attribute(key)
    }

    #[must_use]
    pub fn resolver<'a>(&'a self, context: &'a LocaleContext) -> TranslationResolver<'a> {
        TranslationResolver::new(&self.schema, context, &self.transforms)
    }

    fn writer<'a>(&'a mut self, context: &'a LocaleContext) -> TranslationWriter<'a> {
        let resolver = TranslationResolver::new(&self.schema, context, &self.transforms);
        TranslationWriter::new(&mut self.attributes, resolver, &self.listeners)
    }

    /// Reads an attribute the way the host's field access would.
    ///
    /// - `name_en`: the `en` translation of `name`
    /// - `name`: the translation in the active locale
    /// - anything else: the stored value (through its accessor, if any), `null` when absent
    #[must_use]
    pub fn get_attribute(&self, key: &str, context: &LocaleContext) -> AttributeValue {
        if let Some((key, locale)) = self.schema.locale_suffixed_attribute(key) {
            return self.get_translation(key, locale, true, context);
        }

        if !self.is_translatable_attribute(key) {
            let value = self.attributes.get(key).cloned().unwrap_or(Value::Null);
            return self.transforms.access(key, value);
        }

        self.get_translation(key, &context.locale, true, context)
    }

    /// Writes an attribute the way the host's field assignment would.
    ///
    /// A translatable key takes either a locale → value object (one write per entry, in
    /// object order) or a scalar written to the active locale. Other keys are stored as is.
    pub fn set_attribute(
        &mut self,
        key: &str,
        value: AttributeValue,
        context: &LocaleContext,
    ) -> Result<&mut Self> {
        if !self.is_translatable_attribute(key) {
            self.attributes.set(key.to_string(), value);
            return Ok(self);
        }

        if let Value::Object(translations) = value {
            for (locale, translation) in translations {
                self.set_translation(key, &locale, translation, context)?;
            }
            return Ok(self);
        }

        self.set_translation(key, &context.locale, value, context)
    }

    /// See [`TranslationResolver::get_translation`]: a stored `null` is returned as `null`,
    /// not `""`.
    #[must_use]
    pub fn get_translation(
        &self,
        key: &str,
        locale: &str,
        use_fallback: bool,
        context: &LocaleContext,
    ) -> AttributeValue {
        self.resolver(context).get_translation(&self.attributes, key, locale, use_fallback)
    }

    /// The `locale` translation of `key`, falling back when it is missing.
    #[must_use]
    pub fn translate(&self, key: &str, locale: &str, context: &LocaleContext) -> AttributeValue {
        self.get_translation(key, locale, true, context)
    }

    #[must_use]
    pub fn get_translation_with_fallback(
        &self,
        key: &str,
        locale: &str,
        context: &LocaleContext,
    ) -> AttributeValue {
        self.get_translation(key, locale, true, context)
    }

    #[must_use]
    pub fn get_translation_without_fallback(
        &self,
        key: &str,
        locale: &str,
        context: &LocaleContext,
    ) -> AttributeValue {
        self.get_translation(key, locale, false, context)
    }

    /// Stores the `locale` translation of `key` and notifies listeners.
    pub fn set_translation(
        &mut self,
        key: &str,
        locale: &str,
        value: AttributeValue,
        context: &LocaleContext,
    ) -> Result<&mut Self> {
        self.writer(context).set_translation(key, locale, value)?;
        Ok(self)
    }

    /// Stores several translations of `key` in iteration order.
    pub fn set_translations<I, L>(
        &mut self,
        key: &str,
        translations: I,
        context: &LocaleContext,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (L, AttributeValue)>,
        L: AsRef<str>,
    {
        self.schema.guard(key)?;

        for (locale, translation) in translations {
            self.set_translation(key, locale.as_ref(), translation, context)?;
        }

        Ok(self)
    }

    /// Clears the `locale` column of `key` by setting it to `null`.
    pub fn forget_translation(&mut self, key: &str, locale: &str) -> &mut Self {
        self.attributes.set(compose_key(key, locale), Value::Null);
        self
    }

    /// Clears the `locale` column of every translatable key.
    pub fn forget_all_translations(&mut self, locale: &str) -> &mut Self {
        for key in self.schema.translatable_attributes() {
            self.attributes.set(compose_key(key, locale), Value::Null);
        }
        self
    }

    /// Non-blank translations of `key`, or of every translatable key when `key` is `None`.
    ///
    /// The all-keys form maps each logical key to its own locale → value object.
    pub fn get_translations(&self, key: Option<&str>, context: &LocaleContext) -> Result<Translations> {
        let resolver = self.resolver(context);
        match key {
            Some(key) => resolver.get_translations(&self.attributes, key),
            None => Ok(resolver.all_translations(&self.attributes)),
        }
    }

    /// Every translatable key with its non-blank translations.
    #[must_use]
    pub fn translations(&self, context: &LocaleContext) -> Translations {
        self.resolver(context).all_translations(&self.attributes)
    }

    pub fn has_translation(
        &self,
        key: &str,
        locale: Option<&str>,
        context: &LocaleContext,
    ) -> Result<bool> {
        self.resolver(context).has_translation(&self.attributes, key, locale)
    }
}

impl<S: fmt::Debug> fmt::Debug for TranslatableRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatableRecord")
            .field("schema", &self.schema)
            .field("attributes", &self.attributes)
            .field("transforms", &self.transforms)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
