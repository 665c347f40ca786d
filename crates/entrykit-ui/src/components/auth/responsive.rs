use super::form_body::{LoginFormBody, use_login_form};
use crate::components::atoms::BrandMark;
use crate::core::fields::FieldSpec;
use crate::core::form::FormValues;
use crate::core::layout::LayoutMode;
use crate::core::theme::{ThemeMode, ThemeSetting, ThemeTokens};
use crate::hooks::{use_container_layout, use_resolved_theme, use_translation};
use crate::i18n::{LocaleCode, TranslationBundle};
use yew::prelude::*;

/// Sign-in form that switches between stacked and two-panel layouts based on
/// its own container width.
#[derive(Properties, PartialEq)]
pub struct ResponsiveLoginFormProps {
    /// Inputs in display order; names should be unique.
    pub fields: Vec<FieldSpec>,
    /// Theme selection.
    #[prop_or_default]
    pub theme: ThemeSetting,
    /// Render a toggle that overrides the theme for this instance only.
    #[prop_or_default]
    pub show_theme_toggle: bool,
    /// Heading override.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Subheading override.
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Submit caption override.
    #[prop_or_default]
    pub submit_label: Option<AttrValue>,
    /// Footer content; defaults to a copyright line.
    #[prop_or_default]
    pub footer: Option<Html>,
    /// Company name in the brand bar and panel.
    #[prop_or_default]
    pub company_name: Option<AttrValue>,
    /// Company logo URL.
    #[prop_or_default]
    pub company_logo: Option<AttrValue>,
    /// Brand panel tagline.
    #[prop_or_default]
    pub tagline: Option<Html>,
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

/// Full-page sign-in with a brand bar, re-laid out whenever its container
/// crosses the mobile width.
#[function_component(ResponsiveLoginForm)]
pub fn responsive_login_form(props: &ResponsiveLoginFormProps) -> Html {
    let root = use_node_ref();
    let layout = use_container_layout(root.clone());
    let resolved = use_resolved_theme(props.theme);
    let model = use_login_form(props.fields.clone(), props.is_loading);
    let local_override = use_state_eq(|| None::<ThemeMode>);
    let theme = (*local_override).unwrap_or(resolved);
    let tokens = theme.tokens();
    let bundle = use_translation(props.locale);

    let company = props
        .company_name
        .clone()
        .unwrap_or_else(|| AttrValue::from(bundle.text("login.company", "Your Company")));
    let footer = props.footer.clone().unwrap_or_else(|| {
        let year = js_sys::Date::new_0().get_full_year();
        html! { <>{ format!("© {year} {company}") }</> }
    });

    let toggle = props.show_theme_toggle.then(|| {
        let onclick = {
            let local_override = local_override.clone();
            Callback::from(move |_: MouseEvent| local_override.set(Some(theme.toggled())))
        };
        theme_toggle(theme, tokens, &bundle, onclick)
    });

    let top_bar = html! {
        <div class={classes!("w-full", "flex", "items-center", "justify-between", "px-6", "py-3", "border-b", "transition-colors", "duration-300", tokens.top_bar)}>
            <div class="flex items-center gap-2.5">
                <BrandMark
                    logo_url={props.company_logo.clone()}
                    company={company.clone()}
                    img_class={classes!("h-7", "w-auto", "object-contain")}
                    fallback={html! { <div class="w-2 h-2 rounded-full bg-black" /> }}
                />
                <span class={classes!("text-[0.78rem]", "font-medium", "tracking-[0.14em]", "uppercase", tokens.brand_text)}>
                    { company.clone() }
                </span>
            </div>
            { toggle.unwrap_or_default() }
        </div>
    };

    let heading = html! {
        <>
            <h1 class={classes!("text-[2.2rem]", "leading-[1.15]", "mb-1.5", "font-bold", "tracking-tight", tokens.heading)}>
                { props.title.as_ref().map_or_else(|| bundle.text("login.title", "Welcome back."), ToString::to_string) }
            </h1>
            <p class={classes!("text-sm", "font-light", "mb-8", "leading-relaxed", tokens.sub)}>
                { props.subtitle.as_ref().map_or_else(|| bundle.text("login.subtitle", "Sign in to continue where you left off."), ToString::to_string) }
            </p>
        </>
    };

    let body = html! {
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
    };

    let content = match layout {
        LayoutMode::SingleColumn => html! {
            <div class={classes!("flex", "flex-1", "flex-col", "px-6", "py-10", tokens.form_bg)}>
                <div class="w-full max-w-[400px] mx-auto pt-4">
                    { heading }
                    { body }
                </div>
                <span class={classes!("mt-10", "text-center", "text-[0.72rem]", "tracking-widest", "uppercase", tokens.panel_footer)}>
                    { footer }
                </span>
            </div>
        },
        LayoutMode::TwoPanel => {
            let tagline = props.tagline.clone().unwrap_or_else(|| html! {
                <>
                    { "The place where" }<br />
                    <strong class="not-italic font-bold text-black">{ "great work" }</strong><br />
                    { "begins." }
                </>
            });
            html! {
                <div class="flex flex-1">
                    <div class={classes!("flex", "w-[42%]", "border-r", "p-12", "flex-col", "justify-between", "relative", "overflow-hidden", "transition-colors", "duration-300", tokens.panel)}>
                        <div
                            class="absolute -bottom-20 -right-20 w-80 h-80 rounded-full pointer-events-none"
                            style={format!("background:{}", tokens.orb_gradient)}
                        />
                        <div class="relative">
                            <BrandMark
                                logo_url={props.company_logo.clone()}
                                company={company.clone()}
                                img_class={classes!("h-12", "w-auto", "object-contain", "mb-8")}
                                fallback={html! { <div class="w-14 h-[3px] bg-black rounded-full mb-6" /> }}
                            />
                            <p class={classes!("text-[2.1rem]", "leading-[1.3]", "max-w-[280px]", "italic", "font-normal", tokens.tagline)}>
                                { tagline }
                            </p>
                        </div>
                        <span class={classes!("relative", "text-[0.72rem]", "tracking-widest", "uppercase", tokens.panel_footer)}>
                            { footer }
                        </span>
                    </div>
                    <div class={classes!("flex-1", "flex", "items-center", "justify-center", "px-6", "py-10", tokens.form_bg)}>
                        <div class="w-full max-w-[400px] pt-4">
                            { heading }
                            { body }
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div
            ref={root}
            class={classes!("min-h-screen", "flex", "flex-col", "transition-colors", "duration-300", tokens.root)}
            data-layout={layout.as_str()}
            data-theme={theme.as_str()}
            dir={bundle.dir()}
        >
            { top_bar }
            { content }
        </div>
    }
}

fn theme_toggle(
    theme: ThemeMode,
    tokens: &'static ThemeTokens,
    bundle: &TranslationBundle,
    onclick: Callback<MouseEvent>,
) -> Html {
    let label = if theme.is_dark() {
        bundle.text("login.to_light", "Switch to light mode")
    } else {
        bundle.text("login.to_dark", "Switch to dark mode")
    };
    html! {
        <button
            type="button"
            aria-label={label}
            class={classes!("relative", "flex", "items-center", "w-14", "h-7", "rounded-full", "px-1", "transition-all", "duration-300", "focus:outline-none", tokens.toggle_bg)}
            {onclick}
        >
            <span class="absolute left-1.5 text-[0.65rem]">{ "🌙" }</span>
            <span class="absolute right-1.5 text-[0.65rem]">{ "☀️" }</span>
            <span class={classes!("relative", "z-10", "w-5", "h-5", "rounded-full", "shadow-md", "transition-all", "duration-300", tokens.thumb_bg, tokens.thumb_pos)} />
        </button>
    }
}
