//! Fallback locale settings and the locale context threaded through every call.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    InvalidLocale,
    LocaleContext,
    TranslatableSettings,
};
