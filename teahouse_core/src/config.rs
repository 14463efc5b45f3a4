// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site-wide thresholds, delays, and DOM hooks.
//!
//! [`SiteConfig::standard`] is the configuration the published pages are
//! written against. Components read everything they need from it instead of
//! hard-coding selectors, so a page with different markup only needs a
//! different [`Selectors`] value.

use alloc::format;
use alloc::string::String;
use core::time::Duration;

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A visibility threshold outside `0.0..=1.0`.
    #[error("visibility threshold {0} is outside 0..=1")]
    ThresholdOutOfRange(f64),
    /// A negative or non-finite scroll threshold.
    #[error("scroll threshold {0} must be finite and non-negative")]
    InvalidScrollThreshold(f64),
}

/// CSS selectors the page scripts attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Fixed navigation bar.
    pub navbar: &'static str,
    /// Hamburger button.
    pub menu_toggle: &'static str,
    /// Collapsible link list.
    pub nav_links: &'static str,
    /// Sections that fade in on first sight.
    pub fade_in: &'static str,
    /// Images with a deferred source.
    pub lazy_image: &'static str,
    /// Same-page links.
    pub fragment_link: &'static str,
    /// Contact form.
    pub contact_form: &'static str,
    /// Wrapper that receives a field's inline error.
    pub form_group: &'static str,
    /// Tea tab buttons.
    pub tab_button: &'static str,
    /// Tea tab panels.
    pub tab_panel: &'static str,
    /// Color-cycling leaf.
    pub leaf: &'static str,
    /// Description under the leaf.
    pub leaf_description: &'static str,
    /// Map markers.
    pub area_marker: &'static str,
    /// Shared falling-leaf animation element.
    pub falling_tea: &'static str,
    /// Main container faded out before leaving the page.
    pub main_container: &'static str,
    /// Background music element.
    pub bgm_audio: &'static str,
    /// Play/pause button.
    pub bgm_play: &'static str,
    /// Volume slider.
    pub bgm_volume: &'static str,
    /// Loading curtain removed after `load`.
    pub page_loader: &'static str,
}

impl Selectors {
    /// Selectors used by the tea culture pages.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            navbar: ".navbar",
            menu_toggle: ".menu-toggle",
            nav_links: ".nav-links",
            fade_in: ".fade-in",
            lazy_image: "img[data-src]",
            fragment_link: "a[href^=\"#\"]",
            contact_form: ".contact-form form",
            form_group: ".form-group",
            tab_button: ".tea-nav-btn",
            tab_panel: ".tea-tab-content",
            leaf: "#leaf-element",
            leaf_description: "#tea-desc",
            area_marker: ".area-marker",
            falling_tea: "#falling-tea",
            main_container: ".container",
            bgm_audio: "#bgm-audio",
            bgm_play: "#bgm-play-btn",
            bgm_volume: "#bgm-volume",
            page_loader: ".page-loader",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration shared by every page component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Vertical offset above which the navigation bar is "scrolled".
    pub scroll_threshold: f64,
    /// Visible fraction that reveals a fade-in section.
    pub fade_in_threshold: f64,
    /// Visible fraction that starts loading a lazy image.
    pub lazy_image_threshold: f64,
    /// Time between a marker click and leaving the page.
    pub marker_navigation_delay: Duration,
    /// How long the submission overlay stays up.
    pub success_display: Duration,
    /// Length of the overlay's exit animation.
    pub success_fade_out: Duration,
    /// Length of the page loader's fade.
    pub loader_fade_out: Duration,
    /// Path prefix of area detail pages.
    pub detail_page_prefix: &'static str,
    /// Path suffix of area detail pages.
    pub detail_page_suffix: &'static str,
    /// DOM hooks.
    pub selectors: Selectors,
}

impl SiteConfig {
    /// Default configuration for the published site.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            scroll_threshold: 100.0,
            fade_in_threshold: 0.1,
            lazy_image_threshold: 0.0,
            marker_navigation_delay: Duration::from_millis(2000),
            success_display: Duration::from_millis(3000),
            success_fade_out: Duration::from_millis(300),
            loader_fade_out: Duration::from_millis(300),
            detail_page_prefix: "subpages/",
            detail_page_suffix: "-detail.html",
            selectors: Selectors::standard(),
        }
    }

    /// Checks that thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for t in [self.fade_in_threshold, self.lazy_image_threshold] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::ThresholdOutOfRange(t));
            }
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::InvalidScrollThreshold(self.scroll_threshold));
        }
        Ok(())
    }

    /// Relative URL of the detail page for `area`, taken verbatim.
    #[must_use]
    pub fn detail_page(&self, area: &str) -> String {
        format!(
            "{}{area}{}",
            self.detail_page_prefix, self.detail_page_suffix
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_valid() {
        assert_eq!(SiteConfig::standard().validate(), Ok(()));
    }

    #[test]
    fn rejects_threshold_above_one() {
        let mut cfg = SiteConfig::standard();
        cfg.fade_in_threshold = 1.5;
        assert_eq!(cfg.validate(), Err(ConfigError::ThresholdOutOfRange(1.5)));
    }

    #[test]
    fn rejects_nan_threshold() {
        let mut cfg = SiteConfig::standard();
        cfg.lazy_image_threshold = f64::NAN;
        assert!(cfg.validate().is_err(), "NaN must not pass");
    }

    #[test]
    fn rejects_negative_scroll_threshold() {
        let mut cfg = SiteConfig::standard();
        cfg.scroll_threshold = -1.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidScrollThreshold(-1.0))
        );
    }

    #[test]
    fn detail_page_uses_area_verbatim() {
        let cfg = SiteConfig::standard();
        assert_eq!(cfg.detail_page("fujian"), "subpages/fujian-detail.html");
        assert_eq!(cfg.detail_page("西湖"), "subpages/西湖-detail.html");
    }
}
