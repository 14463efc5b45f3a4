// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-reactive navigation bar.

use std::cell::Cell;
use std::rc::Rc;

use teahouse_backend_web::dom::{Scope as _, listen, set_class, window};
use teahouse_backend_web::{DomError, scroll_y};
use teahouse_core::chrome::ChromeState;
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::{ChromeEvent, Feature};
use web_sys::{Document, Element};

use crate::diag;

const SCROLLED_CLASS: &str = "scrolled";

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selector = config.selectors.navbar;
    let Some(navbar) = document.query(selector)? else {
        diag::inert(Feature::Navbar, selector);
        return Ok(());
    };
    let window = window()?;
    let threshold = config.scroll_threshold;
    let state = Rc::new(Cell::new(ChromeState::default()));

    // A page restored mid-scroll must render scrolled before the first event.
    update(&navbar, &state, scroll_y(&window), threshold)?;

    let win = window.clone();
    listen(&window, "scroll", move |_event| {
        diag::check(
            Feature::Navbar,
            update(&navbar, &state, scroll_y(&win), threshold),
        );
    })
}

fn update(
    navbar: &Element,
    state: &Cell<ChromeState>,
    offset: f64,
    threshold: f64,
) -> Result<(), DomError> {
    let next = ChromeState::from_offset(offset, threshold);
    set_class(navbar, SCROLLED_CLASS, next.is_scrolled())?;
    if state.replace(next) != next {
        diag::trace(|t| t.chrome(&ChromeEvent { state: next, offset }));
    }
    Ok(())
}
