// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tea tab selection.
//!
//! [`TabSet`] mirrors the page's tab buttons by their `data-tab` targets. The
//! initial state is whatever the markup set, so nothing is active until the
//! first valid click; after that exactly one tab is.

use alloc::string::String;
use alloc::vec::Vec;

/// Reads a `data-tab` attribute value, rejecting missing or empty targets.
#[must_use]
pub fn tab_target(attr: Option<&str>) -> Option<&str> {
    attr.filter(|t| !t.is_empty())
}

/// Tab buttons and the currently selected one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSet {
    targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl TabSet {
    /// Creates a set from each button's `data-tab` attribute, in page order.
    #[must_use]
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            targets: targets
                .into_iter()
                .map(|t| {
                    let t: Option<String> = t.map(Into::into);
                    tab_target(t.as_deref()).map(String::from)
                })
                .collect(),
            active: None,
        }
    }

    /// Number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if there are no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Handles a click on button `index`.
    ///
    /// Returns the panel id to activate, or `None` (and changes nothing) if
    /// the button has no target.
    pub fn click(&mut self, index: usize) -> Option<&str> {
        let target = self.targets.get(index)?.as_deref()?;
        self.active = Some(index);
        Some(target)
    }

    /// Index of the active button.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Panel id of the active button.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.targets.get(self.active?)?.as_deref()
    }

    /// Returns `true` if the button at `index` is active.
    #[must_use]
    pub fn is_button_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Returns `true` if `panel_id` is the active panel.
    #[must_use]
    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        self.active_panel() == Some(panel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea_tabs() -> TabSet {
        TabSet::new([
            Some("green"),
            Some("oolong"),
            None,
            Some("dark"),
            Some(""),
        ])
    }

    #[test]
    fn nothing_active_before_first_click() {
        let tabs = tea_tabs();
        assert_eq!(tabs.active_index(), None);
        assert_eq!(tabs.len(), 5);
    }

    #[test]
    fn exactly_one_panel_active_after_each_click() {
        let mut tabs = tea_tabs();
        let panels = ["green", "oolong", "dark"];
        for (index, expected) in [(1, "oolong"), (0, "green"), (3, "dark"), (1, "oolong")] {
            assert_eq!(tabs.click(index), Some(expected));
            let active: Vec<_> = panels.iter().filter(|p| tabs.is_panel_active(p)).collect();
            assert_eq!(active, [&expected], "after clicking {index}");
            let buttons = (0..tabs.len()).filter(|i| tabs.is_button_active(*i)).count();
            assert_eq!(buttons, 1, "one button active");
        }
    }

    #[test]
    fn button_without_target_is_ignored() {
        let mut tabs = tea_tabs();
        tabs.click(3);
        assert_eq!(tabs.click(2), None, "missing attribute");
        assert_eq!(tabs.click(4), None, "empty attribute");
        assert_eq!(tabs.click(99), None, "unknown button");
        assert_eq!(tabs.active_panel(), Some("dark"), "selection unchanged");
    }

    #[test]
    fn tab_target_rejects_empty() {
        assert_eq!(tab_target(Some("white")), Some("white"));
        assert_eq!(tab_target(Some("")), None);
        assert_eq!(tab_target(None), None);
    }
}
