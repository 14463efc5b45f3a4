// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bar scroll state and the mobile menu.
//!
//! [`ChromeState`] is derived from the current scroll offset alone; it keeps no
//! history. [`MenuState`] is the open/closed flag of the mobile menu, driven by
//! classified clicks ([`ClickOrigin`]). The hamburger bars are not separate
//! state: their active flag is always [`MenuState::bars_active`], so they
//! cannot drift out of sync with the menu.

/// Visual state of the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChromeState {
    /// At or near the top of the page.
    #[default]
    Unscrolled,
    /// Scrolled past the threshold.
    Scrolled,
}

impl ChromeState {
    /// State for vertical `offset` given `threshold`. Strictly greater scrolls.
    #[must_use]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Scrolled
        } else {
            Self::Unscrolled
        }
    }

    /// Returns `true` for [`ChromeState::Scrolled`].
    #[must_use]
    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Scrolled)
    }
}

/// Where a click landed, relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickOrigin {
    /// The hamburger toggle (or something inside it).
    Toggle,
    /// A navigation link inside the menu.
    NavLink,
    /// Inside the menu region, but not on a link.
    Menu,
    /// Anywhere else in the document.
    Outside,
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// A closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Active flag for every hamburger bar.
    #[must_use]
    pub const fn bars_active(&self) -> bool {
        self.open
    }

    /// Flips the menu.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Forces the menu closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies a click. Returns `true` if the open state changed.
    pub fn click(&mut self, origin: ClickOrigin) -> bool {
        let before = self.open;
        match origin {
            ClickOrigin::Toggle => self.toggle(),
            ClickOrigin::NavLink | ClickOrigin::Outside => self.close(),
            ClickOrigin::Menu => {}
        }
        before != self.open
    }
}
