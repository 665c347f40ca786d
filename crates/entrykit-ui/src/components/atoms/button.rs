use crate::core::ui::{ButtonVariant, button_style};
use yew::prelude::*;

/// Button primitive.
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Button content.
    #[prop_or_default]
    pub children: Children,
    /// Visual weight.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Extra inline declarations, applied after the variant.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// `type` attribute; browsers default to `submit`.
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    /// Disabled flag.
    #[prop_or_default]
    pub disabled: bool,
    /// Exposed as `aria-busy`.
    #[prop_or_default]
    pub busy: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Renders a styled `<button>`.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = button_style(props.variant, props.style.as_deref());
    html! {
        <button
            class={props.class.clone()}
            style={style}
            r#type={props.r#type.clone()}
            disabled={props.disabled}
            aria-busy={props.busy.then_some("true")}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
