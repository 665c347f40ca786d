use super::field::FormField;
use crate::components::atoms::{AlertBanner, Button, Spinner};
use crate::core::fields::{FieldSpec, validate_fields};
use crate::core::form::{ControlState, FormAction, FormModel, FormValues, SubmitPhase, alerts};
use crate::core::theme::ThemeTokens;
use crate::i18n::TranslationBundle;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

const SUBMIT_STYLE: &str =
    "width:100%;display:flex;align-items:center;justify-content:center;gap:8px;";

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Form state for one login component, kept above the layout switch so a
/// re-layout never drops typed values.
#[hook]
pub(crate) fn use_login_form(
    fields: Vec<FieldSpec>,
    is_loading: bool,
) -> UseReducerHandle<FormModel> {
    let model = use_reducer(FormModel::new);

    use_effect_with_deps(
        |fields: &Vec<FieldSpec>| {
            if let Err(err) = validate_fields(fields) {
                console::warn!("invalid login form fields", err.to_string());
            }
            || ()
        },
        fields,
    );
    {
        let model = model.clone();
        use_effect_with_deps(
            move |is_loading: &bool| {
                model.dispatch(FormAction::ObserveLoading(*is_loading));
                || ()
            },
            is_loading,
        );
    }
    model
}

/// Alerts, fields and submit control shared by every login layout.
#[derive(Properties, PartialEq)]
pub(crate) struct LoginFormBodyProps {
    /// State owned by the enclosing layout.
    pub model: UseReducerHandle<FormModel>,
    /// Inputs in display order.
    pub fields: Vec<FieldSpec>,
    /// Active theme tokens.
    pub tokens: &'static ThemeTokens,
    /// Default text source.
    pub bundle: TranslationBundle,
    /// Caller-owned busy flag.
    #[prop_or_default]
    pub is_loading: bool,
    /// Error text.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Success text.
    #[prop_or_default]
    pub success: Option<AttrValue>,
    /// Submit caption override.
    #[prop_or_default]
    pub submit_label: Option<AttrValue>,
    /// Receives values on accepted submits.
    #[prop_or_default]
    pub on_submit: Callback<FormValues>,
}

#[function_component(LoginFormBody)]
pub(crate) fn login_form_body(props: &LoginFormBodyProps) -> Html {
    let model = props.model.clone();

    let onsubmit = {
        let model = model.clone();
        let on_submit = props.on_submit.clone();
        let is_loading = props.is_loading;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(values) = (*model).clone().submit(is_loading) else {
                return;
            };
            model.dispatch(FormAction::Submit { is_loading });
            on_submit.emit(values);
        })
    };
    let on_toggle_visibility = {
        let model = model.clone();
        Callback::from(move |()| model.dispatch(FormAction::TogglePassword))
    };

    let controls = ControlState::for_loading(props.is_loading);
    let submitting_text = props.bundle.text("login.submitting", "Signing in…");
    let shown = alerts(props.error.as_deref(), props.success.as_deref());
    let phase = match model.phase() {
        SubmitPhase::Idle => "idle",
        SubmitPhase::Submitting => "submitting",
        SubmitPhase::Settled => "settled",
    };
    let caption = if controls.busy {
        submitting_text.clone()
    } else {
        props
            .submit_label
            .as_ref()
            .map_or_else(|| props.bundle.text("login.submit", "Sign in"), ToString::to_string)
    };

    html! {
        <>
            { for shown.into_iter().map(|alert| html! { <AlertBanner alert={alert} /> }) }
            <form onsubmit={onsubmit} data-phase={phase} aria-busy={controls.busy.then_some("true")}>
                <div class="flex flex-col gap-4 mb-8">
                    { for props.fields.iter().map(|spec| {
                        let name = spec.name();
                        let oninput = {
                            let model = model.clone();
                            Callback::from(move |value: String| {
                                model.dispatch(FormAction::Input { name, value });
                            })
                        };
                        html! {
                            <FormField
                                key={name}
                                spec={spec.clone()}
                                value={AttrValue::from(model.value(name).to_string())}
                                password_visible={model.password_visible()}
                                disabled={controls.inputs_disabled}
                                toggle_disabled={controls.visibility_toggle_disabled}
                                tokens={props.tokens}
                                bundle={props.bundle.clone()}
                                oninput={oninput}
                                on_toggle_visibility={on_toggle_visibility.clone()}
                            />
                        }
                    }) }
                </div>
                <Button
                    r#type={Some(AttrValue::from("submit"))}
                    disabled={controls.submit_disabled}
                    busy={controls.busy}
                    style={Some(AttrValue::from(SUBMIT_STYLE))}
                >
                    {if controls.busy {
                        html! {
                            <Spinner
                                class={classes!(props.tokens.spinner_border)}
                                label={Some(AttrValue::from(submitting_text))}
                            />
                        }
                    } else { html! {} }}
                    { caption }
                </Button>
            </form>
        </>
    }
}
