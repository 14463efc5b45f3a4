// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading curtain, dismissed once the page has fully loaded.

use core::time::Duration;

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{Scope as _, listen, ready_state, window};
use teahouse_backend_web::timer::set_timeout;
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::Feature;
use web_sys::{Document, HtmlElement};

use crate::diag;

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selector = config.selectors.page_loader;
    let fade_out = config.loader_fade_out;
    // `load` has already fired if initialization ran late.
    if ready_state(document).as_deref() == Some("complete") {
        return dismiss(document, selector, fade_out);
    }
    let doc = document.clone();
    listen(&*window()?, "load", move |_event| {
        diag::check(Feature::PageLoader, dismiss(&doc, selector, fade_out));
    })
}

fn dismiss(
    document: &Document,
    selector: &'static str,
    fade_out: Duration,
) -> Result<(), DomError> {
    let Some(loader) = document.query_as::<HtmlElement>(selector)? else {
        return Ok(());
    };
    loader.style().set_property("opacity", "0")?;
    set_timeout(fade_out, move || loader.remove())
}
