//! Sidebar navigation widget.

use crate::core::nav::{badge_classes, icon_classes, is_active, item_classes};
use crate::hooks::use_translation;
use crate::i18n::LocaleCode;
use gloo::utils::window;
use yew::prelude::*;

/// One navigation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    /// Visible text.
    pub label: AttrValue,
    /// Link target.
    pub href: AttrValue,
    /// Leading icon.
    pub icon: Option<Html>,
    /// Trailing badge text.
    pub badge: Option<AttrValue>,
    /// Rendered without a link when set.
    pub disabled: bool,
}

impl NavItem {
    /// Enabled item without icon or badge.
    #[must_use]
    pub fn new(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: None,
            badge: None,
            disabled: false,
        }
    }

    /// Attach an icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Html) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach a badge.
    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<AttrValue>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Mark as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Sidebar contents and highlighting inputs.
#[derive(Properties, PartialEq)]
pub struct SidebarNavProps {
    /// Entries in display order.
    pub items: Vec<NavItem>,
    /// Header title override.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Header subtitle override.
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Rendered under the list when given.
    #[prop_or_default]
    pub footer: Option<Html>,
    /// Extra classes on the `<aside>`.
    #[prop_or_default]
    pub class: Classes,
    /// Path used for highlighting; the document location when absent.
    #[prop_or_default]
    pub current_path: Option<AttrValue>,
    /// Locale for default text; the browser's preferred language when unset.
    #[prop_or_default]
    pub locale: Option<LocaleCode>,
}

/// Vertical navigation list highlighting the entry for the current path.
#[function_component(SidebarNav)]
pub fn sidebar_nav(props: &SidebarNavProps) -> Html {
    let bundle = use_translation(props.locale);
    let pathname = props.current_path.as_ref().map_or_else(
        || window().location().pathname().unwrap_or_else(|_| "/".to_string()),
        ToString::to_string,
    );
    let title = props
        .title
        .as_ref()
        .map_or_else(|| bundle.text("nav.title", "Dashboard"), ToString::to_string);
    let subtitle = props
        .subtitle
        .as_ref()
        .map_or_else(|| bundle.text("nav.subtitle", "Navigation"), ToString::to_string);

    html! {
        <aside
            class={classes!(
                "w-full", "max-w-[280px]", "h-full", "bg-white", "rounded-2xl", "shadow-sm",
                "border", "border-gray-100", props.class.clone()
            )}
            dir={bundle.dir()}
        >
            <div class="p-6 border-b border-gray-100">
                <div class="flex items-center gap-3">
                    <div class="inline-flex items-center justify-center w-10 h-10 rounded-2xl bg-black">
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M3 12l2-2 7-7 7 7 2 2" />
                            <path d="M5 10v10a1 1 0 0 0 1 1h4v-6h4v6h4a1 1 0 0 0 1-1V10" />
                        </svg>
                    </div>
                    <div>
                        <h2 class="text-sm font-semibold text-gray-900">{ title }</h2>
                        <p class="text-xs text-gray-500">{ subtitle }</p>
                    </div>
                </div>
            </div>
            <nav class="p-3">
                <ul class="space-y-1">
                    { for props.items.iter().map(|item| nav_row(item, &pathname)) }
                </ul>
            </nav>
            {if let Some(footer) = &props.footer {
                html! { <div class="p-4 border-t border-gray-100">{ footer.clone() }</div> }
            } else { html! {} }}
        </aside>
    }
}

fn nav_row(item: &NavItem, pathname: &str) -> Html {
    let active = is_active(&item.href, pathname);
    let classes = item_classes(active, item.disabled);
    let content = html! {
        <>
            {if let Some(icon) = &item.icon {
                html! { <span class={icon_classes(active)}>{ icon.clone() }</span> }
            } else { html! {} }}
            <span class="flex-1">{ item.label.clone() }</span>
            {if let Some(badge) = &item.badge {
                html! { <span class={badge_classes(active)}>{ badge.clone() }</span> }
            } else { html! {} }}
        </>
    };
    let row = if item.disabled {
        html! { <div class={classes} aria-disabled="true">{ content }</div> }
    } else {
        html! {
            <a
                class={classes}
                href={item.href.clone()}
                aria-current={active.then_some("page")}
            >
                { content }
            </a>
        }
    };
    html! { <li key={item.href.to_string()}>{ row }</li> }
}
