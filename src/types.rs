//! Core value types shared by the resolver and the record wrapper.

use serde_json::{
    Map,
    Value,
};

/// A raw attribute value as stored in a record column.
///
/// Strings, booleans, numbers and `null` are all valid column contents.
pub type AttributeValue = Value;

/// Locale → value mapping, ordered by insertion.
pub type Translations = Map<String, AttributeValue>;

/// Returns true if the value counts as "no translation".
///
/// Only `null` and the empty string are blank. `0`, `false` and `"0"` are real values.
#[must_use]
pub fn is_blank(value: &AttributeValue) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// The value returned when nothing is stored under a composite key.
#[must_use]
pub fn empty_value() -> AttributeValue {
    Value::String(String::new())
}
