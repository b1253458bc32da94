//! Access to the raw attribute columns owned by a host record.

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde_json::Map;

use crate::types::AttributeValue;

/// The default attribute store: column name → value, in insertion order.
pub type AttributeBag = Map<String, AttributeValue>;

/// Column storage of a host record.
///
/// The resolver only touches a record's attributes through this trait.
pub trait AttributeStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&AttributeValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: String, value: AttributeValue);

    /// Removes `key`, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<AttributeValue>;
}

impl AttributeStore for Map<String, AttributeValue> {
    fn get(&self, key: &str) -> Option<&AttributeValue> {
        Self::get(self, key)
    }

    fn set(&mut self, key: String, value: AttributeValue) {
        self.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        // Keep the remaining columns in their original order.
        self.shift_remove(key)
    }
}

impl<H: BuildHasher> AttributeStore for HashMap<String, AttributeValue, H> {
    fn get(&self, key: &str) -> Option<&AttributeValue> {
        Self::get(self, key)
    }

    fn set(&mut self, key: String, value: AttributeValue) {
        self.insert(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        Self::remove(self, key)
    }
}
