//! Active-item matching and class sets for the sidebar navigation.

const ITEM_BASE: &str = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm transition-all";
const ITEM_ACTIVE: &str = "bg-black text-white shadow-sm";
const ITEM_INACTIVE: &str = "text-gray-700 hover:bg-gray-50";
const ITEM_DISABLED: &str = "opacity-50 cursor-not-allowed";

/// Whether `href` should be highlighted for the current `pathname`.
///
/// The root link only matches the root itself; other links also match their
/// nested paths.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Class list for a navigation row.
#[must_use]
pub fn item_classes(active: bool, disabled: bool) -> String {
    let state = if active { ITEM_ACTIVE } else { ITEM_INACTIVE };
    if disabled {
        format!("{ITEM_BASE} {state} {ITEM_DISABLED}")
    } else {
        format!("{ITEM_BASE} {state}")
    }
}

/// Class list for the icon slot.
#[must_use]
pub const fn icon_classes(active: bool) -> &'static str {
    if active { "text-white" } else { "text-gray-400" }
}

/// Class list for a badge pill.
#[must_use]
pub const fn badge_classes(active: bool) -> &'static str {
    if active {
        "text-[11px] px-2 py-0.5 rounded-full border border-white/30 bg-white/10 text-white"
    } else {
        "text-[11px] px-2 py-0.5 rounded-full border border-gray-200 bg-gray-50 text-gray-600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/settings"));
    }

    #[test]
    fn nested_paths_keep_parent_active() {
        assert!(is_active("/settings", "/settings"));
        assert!(is_active("/settings", "/settings/profile"));
        assert!(!is_active("/settings", "/settings-old"));
        assert!(!is_active("/settings", "/"));
    }

    #[test]
    fn classes_reflect_state() {
        let active = item_classes(true, false);
        assert!(active.contains("bg-black"));
        assert!(!active.contains("cursor-not-allowed"));
        let disabled = item_classes(false, true);
        assert!(disabled.contains("text-gray-700"));
        assert!(disabled.ends_with("cursor-not-allowed"));
        assert_eq!(icon_classes(false), "text-gray-400");
        assert!(badge_classes(true).contains("text-white"));
    }
}
