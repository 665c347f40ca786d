//! Button primitive styling shared by every form variant.

/// Visual weight of the button primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Dark fill with light text.
    #[default]
    Primary,
    /// Transparent fill.
    Ghost,
}

const BASE_STYLE: &str =
    "padding:10px 14px;border-radius:10px;border:1px solid #ddd;cursor:pointer;font-weight:600;";

impl ButtonVariant {
    /// Variant-specific inline declarations.
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Primary => "background:#111;color:#fff;border-color:#111;",
            Self::Ghost => "background:transparent;color:#111;",
        }
    }
}

/// Full inline style: base, then variant, then caller declarations.
#[must_use]
pub fn button_style(variant: ButtonVariant, extra: Option<&str>) -> String {
    let mut style = String::from(BASE_STYLE);
    style.push_str(variant.style());
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        style.push_str(extra);
        if !extra.ends_with(';') {
            style.push(';');
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_style_comes_last() {
        let style = button_style(ButtonVariant::Primary, Some("width:100%"));
        assert!(style.starts_with("padding:10px 14px;"));
        assert!(style.ends_with("width:100%;"));
        let primary = style.find("background:#111").expect("variant present");
        let extra = style.find("width:100%").expect("extra present");
        assert!(primary < extra);
    }

    #[test]
    fn ghost_is_transparent() {
        let style = button_style(ButtonVariant::Ghost, None);
        assert!(style.contains("background:transparent"));
        assert!(style.ends_with("color:#111;"));
        assert_eq!(button_style(ButtonVariant::Ghost, Some("  ")), style);
    }
}
