//! Browser language preferences.

use crate::i18n::LocaleCode;
use gloo::utils::window;

/// Locale picked from `navigator.languages`, falling back to
/// `navigator.language` and then English.
#[must_use]
pub fn browser_locale() -> LocaleCode {
    let navigator = window().navigator();
    let mut tags: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|tag| tag.as_string())
        .collect();
    if tags.is_empty() {
        tags.extend(navigator.language());
    }
    LocaleCode::negotiate(tags.iter().map(String::as_str))
}
