use yew::prelude::*;

/// Controlled text input.
#[derive(Properties, PartialEq)]
pub struct InputProps {
    /// Current value.
    #[prop_or_default]
    pub value: AttrValue,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// `type` attribute, `text` when absent.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// `id` attribute.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// `name` attribute.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// `autocomplete` hint.
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    /// Marks the input required.
    #[prop_or_default]
    pub required: bool,
    /// Disabled flag.
    #[prop_or_default]
    pub disabled: bool,
    /// Classes.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the full value after each keystroke.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Renders an `<input>` reporting its value on every keystroke.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    html! {
        <input
            class={props.class.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            name={props.name.clone()}
            autocomplete={props.autocomplete.clone()}
            required={props.required}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
