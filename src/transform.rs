//! Accessor and mutator registry.
//!
//! Accessors rewrite a value on read, mutators take over a write. Both are registered
//! either for a composite key (`name_en`) or for a logical key (`name`); the composite
//! registration wins on read.

use std::collections::HashMap;
use std::fmt;

use crate::resolver::TranslationWriter;
use crate::types::AttributeValue;

/// Read transform: raw stored value → value handed to the caller.
pub type Accessor = Box<dyn Fn(AttributeValue) -> AttributeValue>;

/// Write transform: receives the value and the target locale and writes through the writer.
pub type Mutator = Box<dyn Fn(&mut TranslationWriter<'_>, AttributeValue, &str)>;

/// Transforms of one record type, built once and shared between its records.
#[derive(Default)]
pub struct TransformRegistry {
    accessors: HashMap<String, Accessor>,
    mutators: HashMap<String, Mutator>,
}

impl TransformRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an accessor for `key`, replacing any existing one.
    #[must_use]
    pub fn with_accessor<F>(mut self, key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(AttributeValue) -> AttributeValue + 'static,
    {
        self.accessors.insert(key.into(), Box::new(accessor));
        self
    }

    /// Registers a mutator for `key`, replacing any existing one.
    #[must_use]
    pub fn with_mutator<F>(mut self, key: impl Into<String>, mutator: F) -> Self
    where
        F: Fn(&mut TranslationWriter<'_>, AttributeValue, &str) + 'static,
    {
        self.mutators.insert(key.into(), Box::new(mutator));
        self
    }

    #[must_use]
    pub fn accessor(&self, key: &str) -> Option<&Accessor> {
        self.accessors.get(key)
    }

    #[must_use]
    pub fn mutator(&self, key: &str) -> Option<&Mutator> {
        self.mutators.get(key)
    }

    #[must_use]
    pub fn has_accessor(&self, key: &str) -> bool {
        self.accessors.contains_key(key)
    }

    #[must_use]
    pub fn has_mutator(&self, key: &str) -> bool {
        self.mutators.contains_key(key)
    }

    /// Applies the accessor registered for `key`, or returns the value unchanged.
    #[must_use]
    pub fn access(&self, key: &str, value: AttributeValue) -> AttributeValue {
        match self.accessor(key) {
            Some(accessor) => accessor(value),
            None => value,
        }
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut accessors: Vec<&String> = self.accessors.keys().collect();
        let mut mutators: Vec<&String> = self.mutators.keys().collect();
        accessors.sort();
        mutators.sort();

        f.debug_struct("TransformRegistry")
            .field("accessors", &accessors)
            .field("mutators", &mutators)
            .finish()
    }
}
