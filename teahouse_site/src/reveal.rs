// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fade-in sections and lazy images.
//!
//! Both are a [`VisibilityObserver`] over a page-lifetime target list; only
//! the reveal side effect differs. An empty list is a silent no-op.

use teahouse_backend_web::dom::{Scope as _, set_class};
use teahouse_backend_web::{DomError, Reveal, VisibilityObserver};
use teahouse_core::config::SiteConfig;
use teahouse_core::reveal::RevealKind;
use teahouse_core::trace::{Feature, RevealEvent};
use web_sys::{Document, Element};

use crate::diag;

const VISIBLE_CLASS: &str = "visible";
const DEFERRED_SRC: &str = "data-src";

pub(crate) fn init_fade_in(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let targets = document.query_all(config.selectors.fade_in)?;
    watch(
        targets,
        RevealKind::FadeIn,
        config.fade_in_threshold,
        Feature::FadeIn,
        |el| set_class(el, VISIBLE_CLASS, true),
    )
}

pub(crate) fn init_lazy_images(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let targets = document.query_all(config.selectors.lazy_image)?;
    watch(
        targets,
        RevealKind::LazyImage,
        config.lazy_image_threshold,
        Feature::LazyImages,
        load_image,
    )
}

/// Swaps the deferred source in, which starts the fetch.
fn load_image(img: &Element) -> Result<(), DomError> {
    if let Some(src) = img.get_attribute(DEFERRED_SRC) {
        img.set_attribute("src", &src)?;
        img.remove_attribute(DEFERRED_SRC)?;
    }
    Ok(())
}

fn watch(
    targets: Vec<Element>,
    kind: RevealKind,
    threshold: f64,
    feature: Feature,
    reveal: impl Fn(&Element) -> Result<(), DomError> + 'static,
) -> Result<(), DomError> {
    if targets.is_empty() {
        return Ok(());
    }
    let observer = VisibilityObserver::start(targets, kind, threshold, move |r: Reveal<'_>| {
        diag::check(feature, reveal(r.element));
        diag::trace(|t| {
            t.reveal(&RevealEvent {
                kind,
                slot: r.slot,
                remaining: r.remaining,
            });
        });
    })?;
    // Observation lasts as long as the page.
    core::mem::forget(observer);
    Ok(())
}
