// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM failures.

use alloc::format;
use alloc::string::{String, ToString as _};

use wasm_bindgen::{JsCast as _, JsValue};

/// A DOM call that could not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Not running in a window context.
    #[error("no global `window`")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,
    /// An element matched a selector but is not of the expected type.
    #[error("`{0}` is not the expected element type")]
    WrongType(&'static str),
    /// A JavaScript exception, stringified.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Best-effort human-readable form of a thrown value.
#[must_use]
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    format!("{value:?}")
}
