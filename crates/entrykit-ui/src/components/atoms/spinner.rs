use yew::prelude::*;

/// Busy indicator.
#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Ring color classes for the active theme.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible label.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Small rotating ring.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let classes = classes!(
        "w-3.5",
        "h-3.5",
        "border-2",
        "rounded-full",
        "animate-spin",
        "shrink-0",
        props.class.clone()
    );
    html! {
        <span class={classes} role="status" aria-label={props.label.clone()} />
    }
}
