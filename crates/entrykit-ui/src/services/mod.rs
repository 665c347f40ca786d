//! Browser-facing services: preference storage, language and signal subscriptions.

pub mod locale;
pub mod observers;
pub mod preferences;

pub use locale::browser_locale;
pub use observers::{ColorSchemeSubscription, PreferenceSubscription, ResizeSubscription};
pub use preferences::{load_persisted_theme, persist_theme_preference, prefers_dark};
