//! Read access to the persisted theme preference and the OS color scheme.

use crate::core::theme::{
    PREFERS_DARK_QUERY, THEME_CHANGE_EVENT, THEME_STORAGE_KEY, ThemeMode, parse_persisted,
};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::{CustomEvent, MediaQueryList};

/// Current persisted preference; storage failures count as no preference.
#[must_use]
pub fn load_persisted_theme() -> Option<ThemeMode> {
    match LocalStorage::raw().get_item(THEME_STORAGE_KEY) {
        Ok(value) => value.as_deref().and_then(parse_persisted),
        Err(err) => {
            console::debug!("theme preference unreadable", THEME_STORAGE_KEY, err);
            None
        }
    }
}

/// The `(prefers-color-scheme: dark)` media query, when the browser has one.
pub(crate) fn color_scheme_query() -> Option<MediaQueryList> {
    window().match_media(PREFERS_DARK_QUERY).ok()?
}

/// Current OS dark-mode signal, `None` when unavailable.
#[must_use]
pub fn prefers_dark() -> Option<bool> {
    color_scheme_query().map(|media| media.matches())
}

/// Host-side helper: store a preference and notify mounted components in
/// this document. Other documents are notified by the browser `storage` event.
pub fn persist_theme_preference(mode: ThemeMode) {
    if let Err(err) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, mode.as_str()) {
        console::error!("storage operation failed", "set", THEME_STORAGE_KEY, err);
        return;
    }
    match CustomEvent::new(THEME_CHANGE_EVENT) {
        Ok(event) => {
            if let Err(err) = window().dispatch_event(&event) {
                console::error!("theme change dispatch failed", err);
            }
        }
        Err(err) => console::error!("theme change event unavailable", err),
    }
}
