//! Demo gallery mounting every component with a simulated sign-in flow.

use crate::components::atoms::Button;
use crate::components::auth::{LoginCard, ResponsiveLoginForm};
use crate::components::sidebar::{NavItem, SidebarNav};
use crate::core::fields::{FieldSpec, InputType};
use crate::core::form::FormValues;
use crate::core::theme::{ThemeMode, ThemeSetting};
use crate::core::ui::ButtonVariant;
use crate::services::{load_persisted_theme, persist_theme_preference};
use gloo::console;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SIMULATED_LATENCY_MS: u32 = 1_200;
const DEMO_PASSWORD: &str = "demo";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gallery {
    Responsive,
    Card,
    Sidebar,
}

#[derive(Clone, Default, PartialEq)]
struct Attempt {
    loading: bool,
    error: Option<AttrValue>,
    success: Option<AttrValue>,
}

#[function_component(DemoApp)]
fn demo_app() -> Html {
    let gallery = use_state(|| Gallery::Responsive);
    let attempt = use_state(Attempt::default);

    let on_submit = {
        let attempt = attempt.clone();
        Callback::from(move |values: FormValues| {
            console::log!("demo submit", format!("{:?}", values.keys().collect::<Vec<_>>()));
            attempt.set(Attempt {
                loading: true,
                ..Attempt::default()
            });
            let attempt = attempt.clone();
            Timeout::new(SIMULATED_LATENCY_MS, move || {
                let accepted = values.get("password").map(String::as_str) == Some(DEMO_PASSWORD);
                attempt.set(if accepted {
                    Attempt {
                        success: Some(AttrValue::from("Signed in.")),
                        ..Attempt::default()
                    }
                } else {
                    Attempt {
                        error: Some(AttrValue::from("Invalid credentials. Try \"demo\".")),
                        ..Attempt::default()
                    }
                });
            })
            .forget();
        })
    };

    // Stands in for a toggle living elsewhere in a host application.
    let flip_stored_theme = Callback::from(|_: MouseEvent| {
        let next = load_persisted_theme().unwrap_or(ThemeMode::Light).toggled();
        persist_theme_preference(next);
    });

    let tab = |target: Gallery, label: &'static str| {
        let gallery = gallery.clone();
        let variant = if *gallery == target {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Ghost
        };
        html! {
            <Button
                r#type={Some(AttrValue::from("button"))}
                variant={variant}
                onclick={Callback::from(move |_| gallery.set(target))}
            >
                { label }
            </Button>
        }
    };

    let fields = vec![
        FieldSpec::email(),
        FieldSpec::phone().with_input_type(InputType::Tel),
        FieldSpec::password(),
    ];

    let view = match *gallery {
        Gallery::Responsive => html! {
            <ResponsiveLoginForm
                fields={fields}
                theme={ThemeSetting::Auto}
                show_theme_toggle={true}
                company_name={Some(AttrValue::from("Entrykit"))}
                is_loading={attempt.loading}
                error={attempt.error.clone()}
                success={attempt.success.clone()}
                on_submit={on_submit}
            />
        },
        Gallery::Card => html! {
            <LoginCard
                is_loading={attempt.loading}
                error={attempt.error.clone()}
                success={attempt.success.clone()}
                on_submit={on_submit}
            />
        },
        Gallery::Sidebar => html! {
            <div class="p-6 h-screen">
                <SidebarNav
                    items={vec![
                        NavItem::new("Home", "/"),
                        NavItem::new("Projects", "/projects").with_badge("3"),
                        NavItem::new("Settings", "/settings"),
                        NavItem::new("Billing", "/billing").disabled(),
                    ]}
                    footer={Some(html! { <small class="text-gray-400">{ "v0.1" }</small> })}
                />
            </div>
        },
    };

    html! {
        <div class="min-h-screen flex flex-col">
            <header class="flex gap-2 p-3 border-b border-gray-200">
                { tab(Gallery::Responsive, "Responsive") }
                { tab(Gallery::Card, "Card") }
                { tab(Gallery::Sidebar, "Sidebar") }
                <Button
                    r#type={Some(AttrValue::from("button"))}
                    variant={ButtonVariant::Ghost}
                    style={Some(AttrValue::from("margin-left:auto"))}
                    onclick={flip_stored_theme}
                >
                    { "Flip stored theme" }
                </Button>
            </header>
            { view }
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<DemoApp>::new().render();
}
