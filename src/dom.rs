//! Thin web-sys glue shared by every unit's `mount` function.
//!
//! Lookups return `DomError::MissingElement` so callers can skip a unit;
//! mutations that fail inside the browser are logged, never discarded.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::Unavailable("window"))
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::Unavailable("document"))
}

/// Log a failed browser call.
pub fn report<T>(result: Result<T, JsValue>, context: &'static str) {
    if let Err(e) = result {
        log::warn!("{}", DomError::js(context, &e));
    }
}

// =============================================================================
// QUERIES
// =============================================================================

pub fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing(format!("#{id}")))
}

pub fn query(document: &Document, selector: &str) -> Result<Element, DomError> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::js("querySelector", &e))?
        .ok_or_else(|| DomError::missing(selector))
}

pub fn query_in(parent: &Element, selector: &str) -> Result<Element, DomError> {
    parent
        .query_selector(selector)
        .map_err(|e| DomError::js("querySelector", &e))?
        .ok_or_else(|| DomError::missing(selector))
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            report::<()>(Err(e), "querySelectorAll");
            Vec::new()
        }
    }
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            report::<()>(Err(e), "querySelectorAll");
            Vec::new()
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// =============================================================================
// MUTATIONS
// =============================================================================

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    if on {
        report(classes.add_1(class), "classList.add");
    } else {
        report(classes.remove_1(class), "classList.remove");
    }
}

pub fn set_attribute(element: &Element, name: &str, value: &str) {
    report(element.set_attribute(name, value), "setAttribute");
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        report(html.style().set_property(property, value), "style.setProperty");
    }
}

/// Inline style value of `property`, empty when unset.
pub fn style_value(element: &Element, property: &str) -> String {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return String::new();
    };
    match html.style().get_property_value(property) {
        Ok(value) => value,
        Err(e) => {
            report::<()>(Err(e), "style.getPropertyValue");
            String::new()
        }
    }
}

// =============================================================================
// EVENTS & TIMERS
// =============================================================================

/// Attach `handler` for the page lifetime.
pub fn listen<T, F>(target: &T, event: &str, handler: F) -> Result<(), DomError>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("addEventListener", &e))?;
    closure.forget();
    Ok(())
}

/// Like `listen`, but runs `handler` at most once.
pub fn listen_once<T, F>(target: &T, event: &str, handler: F) -> Result<(), DomError>
where
    T: AsRef<EventTarget>,
    F: FnOnce() + 'static,
{
    let mut pending = Some(handler);
    listen(target, event, move |_| {
        if let Some(handler) = pending.take() {
            handler();
        }
    })
}

/// Run `f` after `delay_ms` on the browser event loop.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(delay_ms, f).forget();
}

/// Run `f` once the document finished parsing.
pub fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), DomError> {
    if document.ready_state() == "loading" {
        listen_once(document, "DOMContentLoaded", f)
    } else {
        f();
        Ok(())
    }
}

/// Run `f` once the window `load` event fired.
pub fn on_window_load(document: &Document, f: impl FnOnce() + 'static) -> Result<(), DomError> {
    if document.ready_state() == "complete" {
        f();
        Ok(())
    } else {
        listen_once(&window()?, "load", f)
    }
}
