// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM lookup, class, and listener helpers.
//!
//! Listeners bound through [`listen`] live as long as the page: the closure is
//! handed to the browser and intentionally leaked, which is how page-lifetime
//! handlers are expressed with `wasm-bindgen`.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::DomError;

/// Returns the global window.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Returns the window's document.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Something selectors can be run against: the document or an element.
pub trait Scope {
    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Result<Option<Element>, DomError>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DomError>;

    /// First element matching `selector`, cast to `T`.
    ///
    /// A match of the wrong type is an error rather than `None`, so broken
    /// markup is reported instead of silently disabling a feature.
    fn query_as<T: JsCast>(&self, selector: &'static str) -> Result<Option<T>, DomError> {
        match self.query(selector)? {
            Some(el) => el
                .dyn_into::<T>()
                .map(Some)
                .map_err(|_| DomError::WrongType(selector)),
            None => Ok(None),
        }
    }
}

impl Scope for Document {
    fn query(&self, selector: &str) -> Result<Option<Element>, DomError> {
        Ok(self.query_selector(selector)?)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        Ok(elements(&self.query_selector_all(selector)?))
    }
}

impl Scope for Element {
    fn query(&self, selector: &str) -> Result<Option<Element>, DomError> {
        Ok(self.query_selector(selector)?)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        Ok(elements(&self.query_selector_all(selector)?))
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds or removes `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), DomError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Binds `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Current document readiness (`"loading"`, `"interactive"`, `"complete"`).
#[must_use]
pub fn ready_state(document: &Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
}

/// Runs `init` once the DOM is parsed: immediately if it already is,
/// otherwise on `DOMContentLoaded`.
pub fn on_ready<F>(init: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if ready_state(&document).as_deref() != Some("loading") {
        init();
        return Ok(());
    }
    let mut init = Some(init);
    listen(&document, "DOMContentLoaded", move |_event| {
        if let Some(init) = init.take() {
            init();
        }
    })
}

/// Whether `name` exists on the global object (feature detection).
#[must_use]
pub fn has_global(window: &Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}
