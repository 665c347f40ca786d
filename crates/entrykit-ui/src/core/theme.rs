//! Theme selection and the per-theme token tables used by the login views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage key holding the host application's persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "entrykit.theme";

/// Same-document event a host dispatches after rewriting [`THEME_STORAGE_KEY`].
pub const THEME_CHANGE_EVENT: &str = "entrykit:theme-change";

/// Media query backing the OS-level dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light or dark theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Static token table for this mode.
    #[must_use]
    pub const fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Light => &LIGHT_TOKENS,
            Self::Dark => &DARK_TOKENS,
        }
    }
}

/// Caller-facing theme configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Always light, regardless of stored or OS preference.
    Light,
    /// Always dark, regardless of stored or OS preference.
    Dark,
    /// Follow the persisted preference, then the OS signal.
    #[default]
    Auto,
}

impl ThemeSetting {
    /// The fixed mode when the setting is explicit.
    #[must_use]
    pub const fn explicit(self) -> Option<ThemeMode> {
        match self {
            Self::Light => Some(ThemeMode::Light),
            Self::Dark => Some(ThemeMode::Dark),
            Self::Auto => None,
        }
    }
}

/// Failure to parse a [`ThemeSetting`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme setting `{0}` (expected light, dark or auto)")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeSetting {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" | "system" => Ok(Self::Auto),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        })
    }
}

/// Interpret a raw persisted preference. Unrecognised values count as absent.
///
/// Accepts both bare (`dark`) and JSON-encoded (`"dark"`) values.
#[must_use]
pub fn parse_persisted(value: &str) -> Option<ThemeMode> {
    match value.trim().trim_matches('"') {
        "dark" => Some(ThemeMode::Dark),
        "light" => Some(ThemeMode::Light),
        _ => None,
    }
}

/// Ordered fallback: explicit setting, then persisted preference, then the OS
/// signal, then light.
#[must_use]
pub fn resolve_theme(
    setting: ThemeSetting,
    persisted: Option<ThemeMode>,
    os_prefers_dark: Option<bool>,
) -> ThemeMode {
    if let Some(mode) = setting.explicit() {
        return mode;
    }
    if let Some(mode) = persisted {
        return mode;
    }
    match os_prefers_dark {
        Some(true) => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Utility class sets for one theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Outermost container background.
    pub root: &'static str,
    /// Brand bar across the top of the form.
    pub top_bar: &'static str,
    /// Decorative brand panel (two-panel layout).
    pub panel: &'static str,
    /// Background behind the form column.
    pub form_bg: &'static str,
    /// Card surface used by the compact login.
    pub card: &'static str,
    /// Input background.
    pub input_bg: &'static str,
    /// Input background while focused.
    pub input_focus_bg: &'static str,
    /// Input border.
    pub input_border: &'static str,
    /// Tagline text in the brand panel.
    pub tagline: &'static str,
    /// Footer text in the brand panel.
    pub panel_footer: &'static str,
    /// Company name in the brand bar.
    pub brand_text: &'static str,
    /// Main heading.
    pub heading: &'static str,
    /// Subtitle under the heading.
    pub sub: &'static str,
    /// Field labels.
    pub label: &'static str,
    /// Input text.
    pub input_text: &'static str,
    /// Input placeholder.
    pub placeholder: &'static str,
    /// Password show/hide control text.
    pub toggle_text: &'static str,
    /// Busy spinner ring colors.
    pub spinner_border: &'static str,
    /// Theme toggle track.
    pub toggle_bg: &'static str,
    /// Theme toggle thumb.
    pub thumb_bg: &'static str,
    /// Theme toggle thumb offset.
    pub thumb_pos: &'static str,
    /// Radial gradient behind the brand panel.
    pub orb_gradient: &'static str,
}

/// Light theme tokens.
pub const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    root: "bg-gray-50",
    top_bar: "bg-gray-50 border-gray-200",
    panel: "bg-white border-gray-200",
    form_bg: "bg-gray-50",
    card: "bg-white border-gray-100",
    input_bg: "bg-gray-50",
    input_focus_bg: "focus:bg-white",
    input_border: "border-gray-200",
    tagline: "text-gray-900",
    panel_footer: "text-gray-400",
    brand_text: "text-gray-500",
    heading: "text-gray-900",
    sub: "text-gray-500",
    label: "text-gray-700",
    input_text: "text-gray-900",
    placeholder: "placeholder-gray-400",
    toggle_text: "text-gray-400",
    spinner_border: "border-gray-200 border-t-gray-900",
    toggle_bg: "bg-gray-200",
    thumb_bg: "bg-white",
    thumb_pos: "translate-x-7",
    orb_gradient: "radial-gradient(circle at 40% 40%, rgba(0,0,0,0.04) 0%, transparent 70%)",
};

/// Dark theme tokens.
pub const DARK_TOKENS: ThemeTokens = ThemeTokens {
    root: "bg-gray-950",
    top_bar: "bg-gray-950 border-gray-800",
    panel: "bg-gray-900 border-gray-800",
    form_bg: "bg-gray-950",
    card: "bg-gray-900 border-gray-800",
    input_bg: "bg-gray-900",
    input_focus_bg: "focus:bg-gray-800",
    input_border: "border-gray-700",
    tagline: "text-gray-100",
    panel_footer: "text-gray-600",
    brand_text: "text-gray-500",
    heading: "text-gray-100",
    sub: "text-gray-500",
    label: "text-gray-400",
    input_text: "text-gray-100",
    placeholder: "placeholder-gray-600",
    toggle_text: "text-gray-500",
    spinner_border: "border-gray-800 border-t-gray-950",
    toggle_bg: "bg-gray-800",
    thumb_bg: "bg-gray-950",
    thumb_pos: "translate-x-0",
    orb_gradient: "radial-gradient(circle at 40% 40%, rgba(0,0,0,0.3) 0%, transparent 70%)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_dark_wins_without_explicit_setting() {
        let mode = resolve_theme(ThemeSetting::Auto, Some(ThemeMode::Dark), Some(false));
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn os_signal_used_when_nothing_persisted() {
        assert_eq!(
            resolve_theme(ThemeSetting::Auto, None, Some(true)),
            ThemeMode::Dark
        );
        assert_eq!(
            resolve_theme(ThemeSetting::Auto, None, Some(false)),
            ThemeMode::Light
        );
        assert_eq!(resolve_theme(ThemeSetting::Auto, None, None), ThemeMode::Light);
    }

    #[test]
    fn explicit_setting_ignores_storage_and_os() {
        assert_eq!(
            resolve_theme(ThemeSetting::Light, Some(ThemeMode::Dark), Some(true)),
            ThemeMode::Light
        );
        assert_eq!(
            resolve_theme(ThemeSetting::Dark, Some(ThemeMode::Light), Some(false)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn unknown_persisted_values_are_ignored() {
        assert_eq!(parse_persisted("dark"), Some(ThemeMode::Dark));
        assert_eq!(parse_persisted(" light "), Some(ThemeMode::Light));
        assert_eq!(parse_persisted("\"dark\""), Some(ThemeMode::Dark));
        assert_eq!(parse_persisted("sepia"), None);
        assert_eq!(parse_persisted(""), None);
    }

    #[test]
    fn setting_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeSetting>(), Ok(ThemeSetting::Dark));
        assert_eq!("system".parse::<ThemeSetting>(), Ok(ThemeSetting::Auto));
        let err = "neon".parse::<ThemeSetting>().unwrap_err();
        assert_eq!(err, ThemeParseError("neon".to_string()));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn tokens_are_keyed_by_mode() {
        assert_eq!(*ThemeMode::Dark.tokens(), DARK_TOKENS);
        assert_eq!(*ThemeMode::Light.tokens(), LIGHT_TOKENS);
        assert_ne!(ThemeMode::Dark.tokens().root, ThemeMode::Light.tokens().root);
    }

    #[test]
    fn theme_mode_round_trips_through_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
