// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for the tea culture site.
//!
//! This crate provides the pieces the page components share:
//!
//! - [`dom`]: window/document access, the [`Scope`](dom::Scope) query trait,
//!   class toggling, page-lifetime listeners, ready detection
//! - [`VisibilityObserver`]: one-shot reveal observation over
//!   `IntersectionObserver`, with a scroll-polling fallback
//! - [`timer`]: fire-and-forget `setTimeout`
//! - [`ConsoleSink`]: [`TraceSink`](teahouse_core::trace::TraceSink) backed by
//!   the developer console
//! - [`DomError`]: what a failed DOM call turns into

#![no_std]

extern crate alloc;

mod console;
pub mod dom;
mod error;
mod observer;
pub mod timer;

pub use console::{ConsoleSink, Level, inert_message};
pub use error::{DomError, describe};
pub use observer::{Reveal, VisibilityObserver};

use web_sys::Window;

/// Current vertical scroll offset, or `0.0` if it cannot be read.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Shows a blocking alert. Failures (e.g. alerts disabled) are ignored.
pub fn alert(window: &Window, message: &str) {
    let _ = window.alert_with_message(message);
}

/// Navigates the page to `href`, relative to the current location.
pub fn navigate(window: &Window, href: &str) -> Result<(), DomError> {
    window.location().set_href(href)?;
    Ok(())
}
