// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The six tea families and the color-cycling leaf.
//!
//! [`TEA_TYPES`] is a fixed, read-only table ordered by the traditional
//! classification (green → dark). [`TeaCycle`] is the leaf widget's own
//! counter into that table; it starts on the first entry and advances by one
//! per click, wrapping after the last.

use alloc::format;
use alloc::string::String;

/// One of the six tea families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeaType {
    /// CSS color applied to the leaf element.
    pub color: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Fermentation descriptor, e.g. `"0%（不发酵）"`.
    pub ferment: &'static str,
}

impl TeaType {
    /// Returns the description markup shown under the leaf.
    ///
    /// The table is static, so the result contains no untrusted text.
    #[must_use]
    pub fn description_html(&self) -> String {
        format!(
            "<strong>{}</strong> - 发酵程度：{}",
            self.name, self.ferment
        )
    }
}

/// The fixed tea table.
pub static TEA_TYPES: [TeaType; 6] = [
    TeaType {
        color: "#81C784",
        name: "绿茶",
        ferment: "0%（不发酵）",
    },
    TeaType {
        color: "#AED581",
        name: "黄茶",
        ferment: "10-20%（轻发酵）",
    },
    TeaType {
        color: "#FFF9C4",
        name: "白茶",
        ferment: "5-10%（微发酵）",
    },
    TeaType {
        color: "#66BB6A",
        name: "青茶",
        ferment: "10-70%（半发酵）",
    },
    TeaType {
        color: "#E57373",
        name: "红茶",
        ferment: "80-100%（全发酵）",
    },
    TeaType {
        color: "#424242",
        name: "黑茶",
        ferment: "100%（后发酵）",
    },
];

/// Widget-owned index into [`TEA_TYPES`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeaCycle {
    index: usize,
}

impl TeaCycle {
    /// Creates a cycle positioned on the first tea.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current position in the table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The tea at the current position.
    #[must_use]
    pub fn current(&self) -> &'static TeaType {
        &TEA_TYPES[self.index]
    }

    /// Advances one step and returns the newly selected tea.
    pub fn advance(&mut self) -> &'static TeaType {
        self.index = (self.index + 1) % TEA_TYPES.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_green_tea() {
        let cycle = TeaCycle::new();
        assert_eq!(cycle.index(), 0, "cycle must start on the first entry");
        assert_eq!(cycle.current().name, "绿茶");
    }

    #[test]
    fn index_is_click_count_mod_six() {
        let mut cycle = TeaCycle::new();
        for clicks in 1..=20 {
            cycle.advance();
            assert_eq!(cycle.index(), clicks % 6, "after {clicks} clicks");
        }
    }

    #[test]
    fn six_clicks_return_to_start() {
        let mut cycle = TeaCycle::new();
        let start = *cycle.current();
        for _ in 0..5 {
            cycle.advance();
        }
        let last = *cycle.advance();
        assert_eq!(last, start, "six clicks must wrap to the initial tea");
        assert_eq!(
            last.description_html(),
            start.description_html(),
            "description must wrap too"
        );
    }

    #[test]
    fn first_click_selects_yellow_tea() {
        let mut cycle = TeaCycle::new();
        let tea = cycle.advance();
        assert_eq!(tea.color, "#AED581");
        assert_eq!(
            tea.description_html(),
            "<strong>黄茶</strong> - 发酵程度：10-20%（轻发酵）"
        );
    }

    #[test]
    fn independent_cycles_do_not_share_state() {
        let mut a = TeaCycle::new();
        let b = TeaCycle::new();
        a.advance();
        a.advance();
        assert_eq!(a.index(), 2, "advanced cycle moves");
        assert_eq!(b.index(), 0, "other cycle is untouched");
    }
}
