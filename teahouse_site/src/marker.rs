// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map markers: falling-leaf animation, then a delayed trip to the area page.

use std::cell::Cell;
use std::rc::Rc;

use teahouse_backend_web::dom::{Scope as _, listen, set_class, window};
use teahouse_backend_web::timer::set_timeout;
use teahouse_backend_web::{DomError, navigate};
use teahouse_core::config::SiteConfig;
use teahouse_core::marker::{MarkerRoute, NavigationLatch};
use teahouse_core::trace::{Feature, MarkerEvent};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement, PageTransitionEvent};

use crate::diag;

const FADE_OUT_CLASS: &str = "fade-out";
const FALL_ANIMATION: &str = "teaFall 2s ease forwards";

struct Markers {
    config: SiteConfig,
    falling: Option<HtmlElement>,
    container: Option<Element>,
    latch: Rc<Cell<NavigationLatch>>,
}

impl Markers {
    fn click(&self, marker: &Element) -> Result<(), DomError> {
        let Some(route) = MarkerRoute::from_attributes(
            marker.get_attribute("data-area"),
            marker.get_attribute("data-emoji"),
        ) else {
            return Ok(());
        };
        let destination = route.detail_page(&self.config);

        let mut latch = self.latch.get();
        let scheduled = latch.try_schedule();
        self.latch.set(latch);
        diag::trace(|t| {
            t.marker(&MarkerEvent {
                area: route.area(),
                destination: &destination,
                scheduled,
            });
        });
        if !scheduled {
            return Ok(());
        }

        if let Some(falling) = &self.falling {
            drop_leaf(falling, route.emoji())?;
        }
        if let Some(container) = &self.container {
            set_class(container, FADE_OUT_CLASS, true)?;
        }
        let window = window()?;
        let latch = Rc::clone(&self.latch);
        set_timeout(self.config.marker_navigation_delay, move || {
            diag::check(Feature::Markers, navigate(&window, &destination));
            release(&latch);
        })
    }

    /// Undoes the outgoing state when the page comes back from the
    /// back/forward cache.
    fn restore(&self) -> Result<(), DomError> {
        release(&self.latch);
        if let Some(container) = &self.container {
            set_class(container, FADE_OUT_CLASS, false)?;
        }
        if let Some(falling) = &self.falling {
            falling.style().set_property("display", "none")?;
        }
        Ok(())
    }
}

fn release(latch: &Cell<NavigationLatch>) {
    let mut l = latch.get();
    l.release();
    latch.set(l);
}

/// Restarts the fall animation on the shared element showing `emoji`.
fn drop_leaf(falling: &HtmlElement, emoji: &str) -> Result<(), DomError> {
    falling.set_inner_html(emoji);
    let style = falling.style();
    style.set_property("animation", "none")?;
    style.set_property("display", "block")?;
    // Reading layout flushes the reset so the animation replays.
    let _ = falling.offset_height();
    style.set_property("animation", FALL_ANIMATION)?;
    Ok(())
}

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selectors = &config.selectors;
    let markers = document.query_all(selectors.area_marker)?;
    if markers.is_empty() {
        return Ok(());
    }
    let state = Rc::new(Markers {
        config: *config,
        falling: document.query_as::<HtmlElement>(selectors.falling_tea)?,
        container: document.query(selectors.main_container)?,
        latch: Rc::new(Cell::new(NavigationLatch::new())),
    });

    for marker in markers {
        let s = Rc::clone(&state);
        let target = marker.clone();
        listen(&marker, "click", move |_event| {
            diag::check(Feature::Markers, s.click(&target));
        })?;
    }

    listen(&*window()?, "pageshow", move |event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if persisted {
            diag::check(Feature::Markers, state.restore());
        }
    })
}
