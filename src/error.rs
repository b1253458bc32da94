use thiserror::Error;

/// Errors raised by translation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslatableError {
    /// A write or guarded read targeted a key that is not configured as translatable
    #[error(
        "Cannot translate attribute `{key}` as it's not one of the translatable attributes: `{}`",
        .translatable.join(", ")
    )]
    AttributeNotTranslatable {
        /// The offending logical key
        key: String,
        /// The keys that are translatable on the record
        translatable: Vec<String>,
    },
}

impl TranslatableError {
    #[must_use]
    pub fn not_translatable(key: impl Into<String>, translatable: &[String]) -> Self {
        Self::AttributeNotTranslatable { key: key.into(), translatable: translatable.to_vec() }
    }
}

/// Result type for translation operations
pub type Result<T, E = TranslatableError> = std::result::Result<T, E>;
