// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scrolling for same-page links.

use teahouse_backend_web::dom::{Scope as _, listen, window};
use teahouse_backend_web::{DomError, scroll_y};
use teahouse_core::anchor::{AnchorAction, classify, document_top, scroll_destination};
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::{AnchorScrollEvent, Feature};
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::diag;

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let navbar = config.selectors.navbar;
    for link in document.query_all(config.selectors.fragment_link)? {
        let doc = document.clone();
        let source = link.clone();
        listen(&link, "click", move |event| {
            diag::check(
                Feature::SmoothScroll,
                on_click(&doc, &source, &event, navbar),
            );
        })?;
    }
    Ok(())
}

fn on_click(
    document: &Document,
    link: &Element,
    event: &Event,
    navbar: &'static str,
) -> Result<(), DomError> {
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let AnchorAction::Lookup(fragment) = classify(&href) else {
        return Ok(());
    };
    let Some(target) = document.get_element_by_id(fragment) else {
        return Ok(());
    };
    event.prevent_default();

    let window = window()?;
    // A page without the fixed bar scrolls the target flush to the top.
    let chrome_height = document
        .query_as::<HtmlElement>(navbar)
        .ok()
        .flatten()
        .map_or(0.0, |bar| f64::from(bar.offset_height()));
    let top = document_top(target.get_bounding_client_rect().top(), scroll_y(&window));
    let destination = scroll_destination(top, chrome_height);

    let options = ScrollToOptions::new();
    options.set_top(destination);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    diag::trace(|t| {
        t.anchor_scroll(&AnchorScrollEvent {
            fragment,
            destination,
        });
    });
    Ok(())
}
