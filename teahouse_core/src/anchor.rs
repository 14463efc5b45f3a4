// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Same-page fragment links.

/// What a fragment link click should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Leave the click to the browser.
    Default,
    /// Look up the element with this id and scroll to it.
    Lookup(&'a str),
}

/// Classifies an `href` attribute value.
///
/// Only values starting with `#` and naming a non-empty fragment are
/// handled; `"#"` alone and anything else fall through to the browser.
#[must_use]
pub fn classify(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => AnchorAction::Lookup(id),
        _ => AnchorAction::Default,
    }
}

/// Document-relative top of an element whose bounding rect starts at
/// `viewport_top` while the page is scrolled by `scroll_y`.
///
/// Layout offsets (`offsetTop`) are relative to the nearest positioned
/// ancestor, so only the bounding rect gives a document position for nested
/// targets.
#[must_use]
pub fn document_top(viewport_top: f64, scroll_y: f64) -> f64 {
    viewport_top + scroll_y
}

/// Scroll position that puts a target at `target_top` (document coordinates)
/// just below a fixed chrome of `chrome_height`.
#[must_use]
pub fn scroll_destination(target_top: f64, chrome_height: f64) -> f64 {
    target_top - chrome_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_default() {
        assert_eq!(classify("#"), AnchorAction::Default);
    }

    #[test]
    fn fragment_is_looked_up() {
        assert_eq!(classify("#history"), AnchorAction::Lookup("history"));
        assert_eq!(classify("#茶艺"), AnchorAction::Lookup("茶艺"));
    }

    #[test]
    fn non_fragment_is_default() {
        assert_eq!(classify("about.html#team"), AnchorAction::Default);
        assert_eq!(classify(""), AnchorAction::Default);
    }

    #[test]
    fn destination_clears_the_chrome() {
        assert_eq!(scroll_destination(1200.0, 70.0), 1130.0);
    }

    #[test]
    fn target_top_does_not_depend_on_positioned_ancestors() {
        // A section at document y=1500 inside a card at y=1400: its offset
        // parent would report 100, the rect reports 1500 - scroll.
        let scroll = 600.0;
        let top = document_top(1500.0 - scroll, scroll);
        assert_eq!(top, 1500.0);
        assert_eq!(scroll_destination(top, 70.0), 1430.0);
    }

    #[test]
    fn target_above_the_viewport_has_negative_rect_top() {
        assert_eq!(document_top(-250.0, 1000.0), 750.0);
    }
}
