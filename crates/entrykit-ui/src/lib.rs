#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Reusable Yew sign-in forms, a button primitive and a sidebar navigation widget.
//!
//! Everything the components decide without touching the DOM (field defaults,
//! theme fallback, layout classification, submit phases) lives in [`crate::core`] and
//! is tested natively. Components, hooks and browser services build for
//! `wasm32` only.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::fields::{FieldKind, FieldSpec, InputType};
pub use crate::core::form::FormValues;
pub use crate::core::layout::LayoutMode;
pub use crate::core::theme::{ThemeMode, ThemeSetting};

#[cfg(test)]
mod tests {
    use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
    use crate::{FieldSpec, FormValues, LayoutMode, ThemeMode, ThemeSetting};
    use crate::core::fields::resolve_field;
    use crate::core::form::FormModel;
    use crate::core::theme::resolve_theme;

    #[test]
    fn narrow_dark_login_round_trip() {
        let bundle = TranslationBundle::new(DEFAULT_LOCALE);
        let fields = FieldSpec::email_password();
        let layout = LayoutMode::for_width(360.0);
        let theme = resolve_theme(ThemeSetting::Auto, None, Some(true));
        assert_eq!(layout, LayoutMode::SingleColumn);
        assert_eq!(theme, ThemeMode::Dark);

        let mut model = FormModel::new();
        model.set_value("email", "ada@example.com");
        model.set_value("password", "analytical");
        model.toggle_password_visibility();
        let password = resolve_field(&fields[1], model.password_visible(), &bundle);
        assert_eq!(password.input_type.as_str(), "text");

        let submitted = model.submit(false).expect("idle form accepts submit");
        let expected: FormValues = [
            ("email".to_string(), "ada@example.com".to_string()),
            ("password".to_string(), "analytical".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(submitted, expected);
    }
}
