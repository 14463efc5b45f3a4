// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page script for the tea culture site.
//!
//! Every component is attached to the document once the DOM is parsed and
//! then runs purely from browser events. Components are independent: a
//! missing element makes one of them inert, and a failing DOM call is
//! reported through the diagnostics sink without stopping the others.
//!
//! Build with: `wasm-pack build --target web teahouse_site`
//! Then load the generated module from the site pages.
//!
//! Two functions are exported to the page for troubleshooting:
//! [`set_verbose`] turns console output up to one line per interaction, and
//! [`diagnostics_json`] returns everything recorded so far.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

mod anchor;
mod audio;
mod diag;
mod form;
mod leaf;
mod loader;
mod marker;
mod menu;
mod navbar;
mod reveal;
mod tabs;

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{document, on_ready};
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::Feature;
use wasm_bindgen::prelude::*;
use web_sys::Document;

type Init = fn(&SiteConfig, &Document) -> Result<(), DomError>;

const COMPONENTS: [(Feature, Init); 11] = [
    (Feature::Navbar, navbar::init),
    (Feature::MobileMenu, menu::init),
    (Feature::FadeIn, reveal::init_fade_in),
    (Feature::SmoothScroll, anchor::init),
    (Feature::ContactForm, form::init),
    (Feature::LazyImages, reveal::init_lazy_images),
    (Feature::Tabs, tabs::init),
    (Feature::Leaf, leaf::init),
    (Feature::Markers, marker::init),
    (Feature::Audio, audio::init),
    (Feature::PageLoader, loader::init),
];

/// Entry point: attaches every component at page-ready time.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let config = SiteConfig::standard();
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    on_ready(move || init_all(&config))?;
    Ok(())
}

fn init_all(config: &SiteConfig) {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            diag::failed(Feature::Startup, &err);
            return;
        }
    };
    for (feature, init) in COMPONENTS {
        diag::check(feature, init(config, &document));
    }
}

/// Turns per-interaction console output on or off.
#[wasm_bindgen]
pub fn set_verbose(verbose: bool) {
    diag::set_verbose(verbose);
}

/// Everything recorded on this page so far, as a JSON array.
#[wasm_bindgen]
pub fn diagnostics_json() -> String {
    diag::recording_json()
}
