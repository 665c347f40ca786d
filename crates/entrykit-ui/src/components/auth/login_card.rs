use super::form_body::{LoginFormBody, use_login_form};
use crate::core::fields::FieldSpec;
use crate::core::form::FormValues;
use crate::core::theme::ThemeSetting;
use crate::hooks::{use_resolved_theme, use_translation};
use crate::i18n::LocaleCode;
use yew::prelude::*;

/// Compact centered sign-in card.
#[derive(Properties, PartialEq)]
pub struct LoginCardProps {
    /// Inputs in display order. Defaults to email + password.
    #[prop_or_else(FieldSpec::email_password)]
    pub fields: Vec<FieldSpec>,
    /// Theme selection.
    #[prop_or_default]
    pub theme: ThemeSetting,
    /// Heading override.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Subheading override.
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Submit caption override.
    #[prop_or_default]
    pub submit_label: Option<AttrValue>,
    /// Caller-owned busy flag.
    #[prop_or_default]
    pub is_loading: bool,
    /// Error text, shown when non-empty.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Success text, shown when non-empty.
    #[prop_or_default]
    pub success: Option<AttrValue>,
    /// Locale for default text; the browser's preferred language when unset.
    #[prop_or_default]
    pub locale: Option<LocaleCode>,
    /// Receives the entered values once per accepted submit.
    #[prop_or_default]
    pub on_submit: Callback<FormValues>,
}

/// Centered card with heading, alerts, fields and submit control.
#[function_component(LoginCard)]
pub fn login_card(props: &LoginCardProps) -> Html {
    let theme = use_resolved_theme(props.theme);
    let model = use_login_form(props.fields.clone(), props.is_loading);
    let bundle = use_translation(props.locale);
    let tokens = theme.tokens();
    let text = |key: &str, fallback: &str, custom: &Option<AttrValue>| {
        custom
            .as_ref()
            .map_or_else(|| bundle.text(key, fallback), ToString::to_string)
    };

    html! {
        <div
            class={classes!("min-h-screen", "grid", "place-items-center", "transition-colors", "duration-300", tokens.root)}
            data-theme={theme.as_str()}
            dir={bundle.dir()}
        >
            <div class="w-full max-w-sm mx-4">
                <div class="text-center mb-8">
                    <div class="inline-flex items-center justify-center w-12 h-12 rounded-2xl bg-black mb-4">
                        <svg width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                            <circle cx="12" cy="7" r="4" />
                        </svg>
                    </div>
                    <h1 class={classes!("text-2xl", "font-bold", "tracking-tight", tokens.heading)}>
                        { text("login.card_title", "Welcome back", &props.title) }
                    </h1>
                    <p class={classes!("text-sm", "mt-1", tokens.sub)}>
                        { text("login.card_subtitle", "Sign in to your account to continue", &props.subtitle) }
                    </p>
                </div>
                <div class={classes!("rounded-2xl", "shadow-sm", "border", "p-8", tokens.card)}>
                    <LoginFormBody
                        model={model.clone()}
                        fields={props.fields.clone()}
                        tokens={tokens}
                        bundle={(*bundle).clone()}
                        is_loading={props.is_loading}
                        error={props.error.clone()}
                        success={props.success.clone()}
                        submit_label={props.submit_label.clone()}
                        on_submit={props.on_submit.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
