use crate::core::form::{Alert, AlertKind};
use yew::prelude::*;

/// Message banner props.
#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    /// Message and its kind.
    pub alert: Alert,
}

/// Error or success banner announced via `role="alert"`.
#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let (tone, icon) = match props.alert.kind {
        AlertKind::Error => (
            "text-red-700 bg-red-50 border-red-100",
            html! { <path d="M8 5v3.5M8 11h.01" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" /> },
        ),
        AlertKind::Success => (
            "text-green-700 bg-green-50 border-green-100",
            html! { <path d="M5 8l2 2 4-4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" /> },
        ),
    };
    let kind = match props.alert.kind {
        AlertKind::Error => "error",
        AlertKind::Success => "success",
    };
    html! {
        <div
            class={classes!("flex", "items-start", "gap-2", "text-sm", "border", "rounded-lg", "px-4", "py-3", "mb-5", tone)}
            role="alert"
            data-kind={kind}
        >
            <svg class="w-4 h-4 shrink-0 mt-0.5" viewBox="0 0 16 16" fill="none">
                <circle cx="8" cy="8" r="7" stroke="currentColor" stroke-width="1.5" />
                { icon }
            </svg>
            { props.alert.message.clone() }
        </div>
    }
}
