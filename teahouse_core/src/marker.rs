// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tea-region map markers.
//!
//! A marker carries `data-area` (the detail page key) and `data-emoji` (what
//! falls across the screen). Clicking a complete marker plays the falling
//! animation and, after a fixed delay, leaves the page. [`NavigationLatch`]
//! lets only the first click schedule it; later clicks while the delay is
//! running are suppressed. The latch is released once the delay has elapsed,
//! so a page that is still alive afterwards (failed navigation, restored from
//! the back/forward cache) accepts clicks again.

use alloc::string::String;

use crate::config::SiteConfig;

/// A marker with both required attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerRoute {
    area: String,
    emoji: String,
}

impl MarkerRoute {
    /// Builds a route from the marker's attributes.
    ///
    /// Returns `None` if either attribute is missing or empty.
    #[must_use]
    pub fn from_attributes(area: Option<String>, emoji: Option<String>) -> Option<Self> {
        let area = area.filter(|a| !a.is_empty())?;
        let emoji = emoji.filter(|e| !e.is_empty())?;
        Some(Self { area, emoji })
    }

    /// The `data-area` value.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// The `data-emoji` value.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Relative URL of this area's detail page.
    #[must_use]
    pub fn detail_page(&self, config: &SiteConfig) -> String {
        config.detail_page(&self.area)
    }
}

/// Once-only guard for the delayed page navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationLatch {
    scheduled: bool,
}

impl NavigationLatch {
    /// An unarmed latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { scheduled: false }
    }

    /// Arms the latch. Returns `true` only for the first call.
    pub fn try_schedule(&mut self) -> bool {
        !core::mem::replace(&mut self.scheduled, true)
    }

    /// Disarms the latch so the next click can schedule again.
    pub fn release(&mut self) {
        self.scheduled = false;
    }

    /// Returns `true` while a navigation is scheduled.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
