//! "Translation has been set" notifications.

use std::sync::mpsc::Sender;

use serde::{
    Deserialize,
    Serialize,
};

use crate::store::AttributeStore;
use crate::types::AttributeValue;

/// Emitted after every successful translation write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationChanged {
    pub key: String,
    pub locale: String,
    pub old_value: AttributeValue,
    pub new_value: AttributeValue,
}

/// Receives [`TranslationChanged`] events together with the record's attributes after the write.
pub trait TranslationListener {
    fn translation_set(&self, attributes: &dyn AttributeStore, event: &TranslationChanged);
}

impl<F> TranslationListener for F
where
    F: Fn(&dyn AttributeStore, &TranslationChanged),
{
    fn translation_set(&self, attributes: &dyn AttributeStore, event: &TranslationChanged) {
        self(attributes, event);
    }
}

impl TranslationListener for Sender<TranslationChanged> {
    fn translation_set(&self, _attributes: &dyn AttributeStore, event: &TranslationChanged) {
        if self.send(event.clone()).is_err() {
            tracing::warn!(key = %event.key, locale = %event.locale, "Translation listener disconnected");
        }
    }
}
