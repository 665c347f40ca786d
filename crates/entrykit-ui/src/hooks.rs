//! Hooks binding the DOM-free resolution rules to live browser signals.

use crate::core::layout::LayoutMode;
use crate::core::theme::{ThemeMode, ThemeSetting, resolve_theme};
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::services::{
    ColorSchemeSubscription, PreferenceSubscription, ResizeSubscription, browser_locale,
    load_persisted_theme, prefers_dark,
};
use gloo::console;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

/// Bundle for `locale`, or for the browser's preferred languages when unset.
#[hook]
pub fn use_translation(locale: Option<LocaleCode>) -> Rc<TranslationBundle> {
    use_memo(
        |locale| TranslationBundle::new((*locale).unwrap_or_else(browser_locale)),
        locale,
    )
}

/// Layout for the element behind `node`, re-classified on every resize.
#[hook]
pub fn use_container_layout(node: NodeRef) -> LayoutMode {
    let layout = use_state_eq(LayoutMode::default);
    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = node.cast::<Element>().and_then(|element| {
                    ResizeSubscription::observe(&element, move |width| {
                        layout.set(LayoutMode::for_width(width));
                    })
                });
                move || drop(subscription)
            },
            node,
        );
    }
    *layout
}

/// Theme for `setting`, following storage and OS changes while in auto mode.
#[hook]
pub fn use_resolved_theme(setting: ThemeSetting) -> ThemeMode {
    let persisted = use_state_eq(load_persisted_theme);
    let os_dark = use_state_eq(prefers_dark);
    {
        let persisted = persisted.clone();
        let os_dark = os_dark.clone();
        use_effect_with_deps(
            move |setting: &ThemeSetting| {
                let subscriptions = setting.explicit().is_none().then(|| {
                    persisted.set(load_persisted_theme());
                    os_dark.set(prefers_dark());
                    let preference = PreferenceSubscription::watch(move || {
                        let next = load_persisted_theme();
                        console::debug!("theme preference changed", format!("{next:?}"));
                        persisted.set(next);
                    });
                    let scheme =
                        ColorSchemeSubscription::watch(move |dark| os_dark.set(Some(dark)));
                    (preference, scheme)
                });
                move || drop(subscriptions)
            },
            setting,
        );
    }
    resolve_theme(setting, *persisted, *os_dark)
}
