// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The color-cycling tea leaf.

use std::cell::Cell;

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{Scope as _, listen};
use teahouse_core::config::SiteConfig;
use teahouse_core::tea::TeaCycle;
use teahouse_core::trace::{Feature, TeaCycleEvent};
use web_sys::{Document, HtmlElement};

use crate::diag;

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selectors = &config.selectors;
    let Some(leaf) = document.query_as::<HtmlElement>(selectors.leaf)? else {
        diag::inert(Feature::Leaf, selectors.leaf);
        return Ok(());
    };
    let description = document.query(selectors.leaf_description)?;
    let cycle = Cell::new(TeaCycle::new());

    let target = leaf.clone();
    listen(&leaf, "click", move |_event| {
        let mut next = cycle.get();
        let tea = next.advance();
        cycle.set(next);

        diag::check(
            Feature::Leaf,
            target.style().set_property("color", tea.color).map_err(DomError::from),
        );
        if let Some(description) = &description {
            description.set_inner_html(&tea.description_html());
        }
        diag::trace(|t| {
            t.tea_cycle(&TeaCycleEvent {
                index: next.index(),
                name: tea.name,
            });
        });
    })
}
