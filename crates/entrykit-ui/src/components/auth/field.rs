use crate::components::atoms::Input;
use crate::core::fields::{FieldSpec, resolve_field};
use crate::core::theme::ThemeTokens;
use crate::i18n::TranslationBundle;
use yew::prelude::*;

/// One labelled input; password fields get a show/hide control.
#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    /// Field description.
    pub spec: FieldSpec,
    /// Current value.
    pub value: AttrValue,
    /// Whether the password is shown in plain text.
    #[prop_or_default]
    pub password_visible: bool,
    /// Disables the input.
    #[prop_or_default]
    pub disabled: bool,
    /// Disables the show/hide control.
    #[prop_or_default]
    pub toggle_disabled: bool,
    /// Active theme tokens.
    pub tokens: &'static ThemeTokens,
    /// Default text source.
    pub bundle: TranslationBundle,
    /// Receives the new value on every keystroke.
    pub oninput: Callback<String>,
    /// Flips password visibility.
    #[prop_or_default]
    pub on_toggle_visibility: Callback<()>,
}

/// Labelled input bound to one [`FieldSpec`].
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let field = resolve_field(&props.spec, props.password_visible, &props.bundle);
    let tokens = props.tokens;

    let input_class = classes!(
        "w-full",
        "border",
        "rounded-xl",
        "px-3.5",
        "py-2.5",
        "text-sm",
        "outline-none",
        "transition-all",
        "duration-200",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-black",
        "focus:border-transparent",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        tokens.input_bg,
        tokens.input_focus_bg,
        tokens.input_border,
        tokens.input_text,
        tokens.placeholder,
        field.has_visibility_toggle.then_some("pr-16"),
    );
    let autocomplete = match field.name {
        "password" => "current-password",
        "email" => "email",
        "username" => "username",
        _ => "tel",
    };

    let toggle = field.has_visibility_toggle.then(|| {
        let onclick = {
            let on_toggle = props.on_toggle_visibility.clone();
            Callback::from(move |_: MouseEvent| on_toggle.emit(()))
        };
        let caption = if props.password_visible {
            props.bundle.text("login.hide", "Hide")
        } else {
            props.bundle.text("login.show", "Show")
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "absolute", "right-3.5", "top-1/2", "-translate-y-1/2", "text-xs", "font-medium",
                    "hover:text-gray-700", "transition-colors", "duration-150",
                    "disabled:opacity-40", "disabled:cursor-not-allowed", tokens.toggle_text
                )}
                aria-pressed={if props.password_visible { "true" } else { "false" }}
                disabled={props.toggle_disabled}
                {onclick}
            >
                { caption }
            </button>
        }
    });

    html! {
        <div data-field={field.name}>
            <label
                for={field.name}
                class={classes!("block", "text-sm", "font-medium", "mb-1.5", tokens.label)}
            >
                { field.label.clone() }
            </label>
            <div class="relative">
                <Input
                    id={Some(AttrValue::from(field.name))}
                    name={Some(AttrValue::from(field.name))}
                    input_type={Some(AttrValue::from(field.input_type.as_str()))}
                    value={props.value.clone()}
                    placeholder={Some(AttrValue::from(field.placeholder.clone()))}
                    autocomplete={Some(AttrValue::from(autocomplete))}
                    required={field.required}
                    disabled={props.disabled}
                    class={input_class}
                    oninput={props.oninput.clone()}
                />
                { toggle.unwrap_or_default() }
            </div>
        </div>
    }
}
