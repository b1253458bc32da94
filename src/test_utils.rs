//! Shared test helpers.
//!
//! Mirrors the test model used throughout: translatable keys `title`, `name` and
//! `description` in locales `en`, `ru` and `uk`.
#![cfg(test)]

use serde_json::json;

use crate::config::{
    LocaleContext,
    TranslatableSettings,
};
use crate::schema::TranslatableSchema;
use crate::store::AttributeBag;

/// The schema of the test model.
pub(crate) fn test_schema() -> TranslatableSchema {
    TranslatableSchema::new(["title", "name", "description"], ["en", "ru", "uk"])
}

/// A bag where every column holds its own name, e.g. `name_en` → `"name_en"`.
pub(crate) fn test_bag() -> AttributeBag {
    let mut bag = AttributeBag::new();
    for key in ["title", "name", "description"] {
        for locale in ["en", "ru", "uk"] {
            let column = format!("{key}_{locale}");
            bag.insert(column.clone(), json!(column));
        }
    }
    bag
}

/// Builds a context the way an application sets its locale.
///
/// # Arguments
/// * `app` - active locale, also used as the application fallback
/// * `package` - package-level fallback locale
pub(crate) fn locales(app: Option<&str>, package: Option<&str>) -> LocaleContext {
    LocaleContext::new(
        app.unwrap_or_default(),
        TranslatableSettings {
            fallback_locale: package.map(str::to_string),
            app_fallback_locale: app.map(str::to_string),
        },
    )
}
