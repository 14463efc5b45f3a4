// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile hamburger menu.
//!
//! The open flag lives in one [`MenuState`]. The link list and every icon bar
//! are re-rendered from it after each change, so they cannot drift apart.

use std::cell::Cell;
use std::rc::Rc;

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{Scope as _, listen, set_class};
use teahouse_core::chrome::{ClickOrigin, MenuState};
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::{Feature, MenuEvent};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, Event, Node};

use crate::diag;

const ACTIVE_CLASS: &str = "active";

struct Menu {
    toggle: Element,
    links: Element,
    bars: Vec<Element>,
    state: Cell<MenuState>,
}

impl Menu {
    fn click(&self, origin: ClickOrigin) -> Result<(), DomError> {
        let mut state = self.state.get();
        if !state.click(origin) {
            return Ok(());
        }
        self.state.set(state);
        set_class(&self.links, ACTIVE_CLASS, state.is_open())?;
        for bar in &self.bars {
            set_class(bar, ACTIVE_CLASS, state.bars_active())?;
        }
        diag::trace(|t| {
            t.menu(&MenuEvent {
                origin,
                open: state.is_open(),
            });
        });
        Ok(())
    }

    /// Whether a document-level click landed outside both the toggle and the
    /// menu. Clicks inside them are handled by their own listeners.
    fn is_outside(&self, event: &Event) -> bool {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        !self.toggle.contains(node) && !self.links.contains(node)
    }
}

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selectors = &config.selectors;
    let Some(toggle) = document.query(selectors.menu_toggle)? else {
        diag::inert(Feature::MobileMenu, selectors.menu_toggle);
        return Ok(());
    };
    let Some(links) = document.query(selectors.nav_links)? else {
        diag::inert(Feature::MobileMenu, selectors.nav_links);
        return Ok(());
    };
    let bars = toggle.query_all("span")?;
    let anchors = links.query_all("a")?;
    let menu = Rc::new(Menu {
        toggle,
        links,
        bars,
        state: Cell::new(MenuState::new()),
    });

    let m = Rc::clone(&menu);
    listen(&menu.toggle, "click", move |_event| {
        diag::check(Feature::MobileMenu, m.click(ClickOrigin::Toggle));
    })?;

    for anchor in &anchors {
        let m = Rc::clone(&menu);
        listen(anchor, "click", move |_event| {
            diag::check(Feature::MobileMenu, m.click(ClickOrigin::NavLink));
        })?;
    }

    listen(document, "click", move |event| {
        if menu.is_outside(&event) {
            diag::check(Feature::MobileMenu, menu.click(ClickOrigin::Outside));
        }
    })
}
