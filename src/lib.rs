//! translatable-columns
//!
//! Column-based attribute translations: a record stores each locale of an attribute in its
//! own column (`name_en`, `name_ru`) and exposes them through one logical attribute (`name`)
//! that resolves to the active locale, with fallback locales when a value is missing.

pub mod config;
pub mod error;
pub mod event;
pub mod key;
pub mod record;
pub mod resolver;
pub mod schema;
pub mod store;
pub mod transform;
pub mod types;

mod test_utils;

pub use config::{
    ConfigManager,
    LocaleContext,
    TranslatableSettings,
};
pub use error::TranslatableError;
pub use event::{
    TranslationChanged,
    TranslationListener,
};
pub use record::TranslatableRecord;
pub use resolver::{
    TranslationResolver,
    TranslationWriter,
};
pub use schema::TranslatableSchema;
pub use store::{
    AttributeBag,
    AttributeStore,
};
pub use transform::TransformRegistry;
pub use types::{
    AttributeValue,
    Translations,
};
