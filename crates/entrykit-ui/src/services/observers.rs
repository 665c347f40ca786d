//! Subscription handles for external signals. Dropping a handle unsubscribes.

use super::preferences::color_scheme_query;
use crate::core::theme::{THEME_CHANGE_EVENT, THEME_STORAGE_KEY};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, ResizeObserver, StorageEvent};

/// Observes an element's rendered width.
pub struct ResizeSubscription {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl ResizeSubscription {
    /// Report the current width immediately, then on every resize of `element`.
    pub fn observe<F>(element: &Element, on_width: F) -> Option<Self>
    where
        F: Fn(f64) + 'static,
    {
        let on_width = Rc::new(on_width);
        let target = element.clone();
        let report = Rc::clone(&on_width);
        let callback = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_entries: JsValue| {
            report(f64::from(target.client_width()));
        }) as Box<dyn FnMut(_)>);

        let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                console::warn!("resize observer unavailable", err);
                return None;
            }
        };
        observer.observe(element);
        on_width(f64::from(element.client_width()));
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches for external writes to the persisted theme preference.
pub struct PreferenceSubscription {
    _storage: EventListener,
    _same_document: EventListener,
}

impl PreferenceSubscription {
    /// Invoke `on_change` whenever the theme key may have changed.
    pub fn watch<F>(on_change: F) -> Self
    where
        F: Fn() + 'static,
    {
        let on_change = Rc::new(on_change);
        let storage = {
            let on_change = Rc::clone(&on_change);
            EventListener::new(&window(), "storage", move |event| {
                // A missing key means the whole store was cleared.
                let key = event.dyn_ref::<StorageEvent>().and_then(StorageEvent::key);
                if key.as_deref().is_none_or(|key| key == THEME_STORAGE_KEY) {
                    on_change();
                }
            })
        };
        let same_document = EventListener::new(&window(), THEME_CHANGE_EVENT, move |_event| {
            on_change();
        });
        Self {
            _storage: storage,
            _same_document: same_document,
        }
    }
}

/// Watches the OS dark-mode media query.
pub struct ColorSchemeSubscription {
    _listener: EventListener,
}

impl ColorSchemeSubscription {
    /// Invoke `on_change` with the new dark-mode flag on every change.
    pub fn watch<F>(on_change: F) -> Option<Self>
    where
        F: Fn(bool) + 'static,
    {
        let media = color_scheme_query()?;
        let source = media.clone();
        let listener = EventListener::new(&media, "change", move |_event| {
            on_change(source.matches());
        });
        Some(Self {
            _listener: listener,
        })
    }
}
