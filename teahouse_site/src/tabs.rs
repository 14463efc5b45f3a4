// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tea category tabs.

use std::cell::RefCell;
use std::rc::Rc;

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{Scope as _, listen, set_class};
use teahouse_core::config::SiteConfig;
use teahouse_core::tabs::TabSet;
use teahouse_core::trace::{Feature, TabEvent};
use web_sys::{Document, Element};

use crate::diag;

const ACTIVE_CLASS: &str = "active";

struct Tabs {
    document: Document,
    buttons: Vec<Element>,
    panels: Vec<Element>,
    set: RefCell<TabSet>,
}

impl Tabs {
    fn click(&self, index: usize) -> Result<(), DomError> {
        let mut set = self.set.borrow_mut();
        let Some(panel) = set.click(index) else {
            return Ok(());
        };
        for el in &self.panels {
            set_class(el, ACTIVE_CLASS, false)?;
        }
        // The target is looked up by id, so it need not carry the panel class.
        if let Some(target) = self.document.get_element_by_id(panel) {
            set_class(&target, ACTIVE_CLASS, true)?;
        }
        diag::trace(|t| t.tab(&TabEvent { index, panel }));

        for (i, button) in self.buttons.iter().enumerate() {
            set_class(button, ACTIVE_CLASS, set.is_button_active(i))?;
        }
        Ok(())
    }
}

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let buttons = document.query_all(config.selectors.tab_button)?;
    if buttons.is_empty() {
        return Ok(());
    }
    let set = TabSet::new(buttons.iter().map(|b| b.get_attribute("data-tab")));
    let tabs = Rc::new(Tabs {
        document: document.clone(),
        panels: document.query_all(config.selectors.tab_panel)?,
        buttons,
        set: RefCell::new(set),
    });

    for (index, button) in tabs.buttons.iter().enumerate() {
        let t = Rc::clone(&tabs);
        listen(button, "click", move |_event| {
            diag::check(Feature::Tabs, t.click(index));
        })?;
    }
    Ok(())
}
