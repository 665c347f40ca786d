use gloo::console;
use yew::prelude::*;

/// Company logo with a silent fallback.
#[derive(Properties, PartialEq)]
pub struct BrandMarkProps {
    /// Logo URL; `None` renders the fallback directly.
    #[prop_or_default]
    pub logo_url: Option<AttrValue>,
    /// Alt text.
    pub company: AttrValue,
    /// Classes for the `<img>`.
    #[prop_or_default]
    pub img_class: Classes,
    /// Decorative mark shown without a usable logo.
    pub fallback: Html,
}

/// Renders the logo, swapping to the fallback if the image fails to load.
#[function_component(BrandMark)]
pub fn brand_mark(props: &BrandMarkProps) -> Html {
    let failed = use_state_eq(|| false);
    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                failed.set(false);
                || ()
            },
            props.logo_url.clone(),
        );
    }

    match &props.logo_url {
        Some(url) if !*failed => {
            let onerror = {
                let failed = failed.clone();
                let url = url.clone();
                Callback::from(move |_: Event| {
                    console::debug!("logo failed to load; using fallback mark", url.to_string());
                    failed.set(true);
                })
            };
            html! {
                <img
                    src={url.clone()}
                    alt={props.company.clone()}
                    class={props.img_class.clone()}
                    {onerror}
                />
            }
        }
        _ => props.fallback.clone(),
    }
}
