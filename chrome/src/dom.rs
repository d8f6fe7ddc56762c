//! The single boundary where chrome touches the document.
//!
//! Everything above this module deals in [`StylePatch`] values and plain
//! numbers; everything here deals in `web_sys` handles. Query helpers return
//! `Option`/empty vectors for absent anchors so callers can skip quietly.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::ChromeError;
use crate::style::{StylePatch, StyleValue};

/// Write a patch to an element's inline style.
pub fn apply(element: &HtmlElement, patch: &StylePatch) -> Result<(), ChromeError> {
    let style = element.style();
    for (name, value) in patch.iter() {
        match value {
            StyleValue::Set(v) => style.set_property(name, v)?,
            StyleValue::Clear => {
                style.remove_property(name)?;
            }
        }
    }
    Ok(())
}

/// [`apply`] for event handlers, where there is no caller to propagate to.
pub fn apply_logged(element: &HtmlElement, patch: &StylePatch) {
    if let Err(e) = apply(element, patch) {
        log::warn!("style patch failed: {e}");
    }
}

#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, ChromeError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, ChromeError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// Descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, ChromeError> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

pub fn create_div(document: &Document) -> Result<HtmlElement, ChromeError> {
    document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ChromeError::Dom("created div is not an HtmlElement".into()))
}

// --- Viewport ---

#[must_use]
pub fn scroll_top(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[must_use]
pub fn viewport_height(window: &Window) -> f64 {
    window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
}

#[must_use]
pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
}

/// Full scrollable height of the document body.
#[must_use]
pub fn doc_height(document: &Document) -> f64 {
    document.body().map_or(0.0, |body| f64::from(body.scroll_height()))
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// --- Listeners ---

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Owns every closure handed to the browser so they live as long as the page.
#[derive(Default)]
pub struct Listeners {
    handlers: Vec<Closure<dyn FnMut(Event)>>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl Listeners {
    pub fn on<F>(&mut self, target: &EventTarget, event: &str, handler: F) -> Result<(), ChromeError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.handlers.push(closure);
        Ok(())
    }

    pub fn keep_observer(&mut self, observer: IntersectionObserver, callback: ObserverCallback) {
        self.observers.push((observer, callback));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len() + self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
