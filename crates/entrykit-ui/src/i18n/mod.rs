//! Lightweight JSON-backed translations for component default text.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Locales shipped with the component defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Arabic.
    Ar,
    /// German.
    De,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 5] {
        [Self::Ar, Self::De, Self::En, Self::Es, Self::Fr]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Map a BCP 47 tag (`fr-CA`, `en_US`) to a shipped locale by its primary subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::all()
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }

    /// First shipped locale among the user's preferred tags, most preferred
    /// first; [`DEFAULT_LOCALE`] when none match.
    #[must_use]
    pub fn negotiate<'a>(preferred: impl IntoIterator<Item = &'a str>) -> Self {
        preferred
            .into_iter()
            .find_map(Self::from_lang_tag)
            .unwrap_or(DEFAULT_LOCALE)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Parsed translation tree for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a bundle for the locale; missing keys fall back to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Whether the locale lays out right-to-left.
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }

    /// Value for the `dir` attribute.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        if self.rtl { "rtl" } else { "ltr" }
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
        LocaleCode::De => include_str!("../../i18n/de.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn partial_locales_fall_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::De);
        assert_eq!(bundle.text("field.password.placeholder", "x"), "••••••••");
        assert_eq!(bundle.text("login.submit", "x"), "Anmelden");
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert_eq!(TranslationBundle::new(LocaleCode::Ar).dir(), "rtl");
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("de_AT"), Some(LocaleCode::De));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("ja-JP"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn negotiation_takes_first_shipped_preference() {
        assert_eq!(
            LocaleCode::negotiate(["ja-JP", "es-MX", "fr"]),
            LocaleCode::Es
        );
        assert_eq!(LocaleCode::negotiate(["ar-EG"]), LocaleCode::Ar);
    }

    #[test]
    fn negotiation_defaults_to_english() {
        assert_eq!(LocaleCode::negotiate(["ja", "zh-Hant"]), DEFAULT_LOCALE);
        assert_eq!(LocaleCode::negotiate(std::iter::empty()), DEFAULT_LOCALE);
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("login.submit", "").is_empty());
            assert!(!bundle.text("nav.title", "").is_empty());
        }
    }
}
