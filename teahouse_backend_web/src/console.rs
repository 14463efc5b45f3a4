// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console diagnostics.
//!
//! [`ConsoleSink`] routes [`TraceSink`] events to the developer console:
//! inert components go to `console.warn`, failures to `console.error`, and
//! everything else to `console.debug` when the sink is verbose.

use alloc::format;
use alloc::string::String;

use teahouse_core::audio::MISSING_AUDIO_DIAGNOSTIC;
use teahouse_core::chrome::ChromeState;
use teahouse_core::trace::{
    AnchorScrollEvent, ChromeEvent, Feature, FieldEvent, InertEvent, InitFailedEvent, MarkerEvent,
    MenuEvent, PlaybackEvent, PlaybackFailedEvent, RevealEvent, SubmissionEvent, TabEvent,
    TeaCycleEvent, TraceSink, VolumeEvent,
};
use wasm_bindgen::JsValue;

/// Console severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// `console.debug`.
    Debug,
    /// `console.warn`.
    Warn,
    /// `console.error`.
    Error,
}

/// A [`TraceSink`] that writes to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that only reports warnings and errors.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Creates a sink that also reports every interaction at debug level.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    fn emit(&self, level: Level, line: &str) {
        let msg = JsValue::from_str(line);
        match level {
            Level::Debug if self.verbose => web_sys::console::debug_1(&msg),
            Level::Debug => {}
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Error => web_sys::console::error_1(&msg),
        }
    }
}

/// Warning text for an inert component; the audio control keeps its own
/// user-facing wording.
#[must_use]
pub fn inert_message(e: &InertEvent) -> String {
    match e.feature {
        Feature::Audio => String::from(MISSING_AUDIO_DIAGNOSTIC),
        feature => format!("[{}] inert: no element matches {}", feature.name(), e.missing),
    }
}

impl TraceSink for ConsoleSink {
    fn on_inert(&mut self, e: &InertEvent) {
        self.emit(Level::Warn, &inert_message(e));
    }

    fn on_init_failed(&mut self, e: &InitFailedEvent<'_>) {
        self.emit(
            Level::Error,
            &format!("[{}] init failed: {}", e.feature.name(), e.error),
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.emit(
            Level::Debug,
            &format!(
                "[reveal] {:?} slot={} remaining={}",
                e.kind, e.slot, e.remaining
            ),
        );
    }

    fn on_chrome(&mut self, e: &ChromeEvent) {
        let state = match e.state {
            ChromeState::Scrolled => "scrolled",
            ChromeState::Unscrolled => "unscrolled",
        };
        self.emit(
            Level::Debug,
            &format!("[navbar] {state} at {:.0}", e.offset),
        );
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        self.emit(
            Level::Debug,
            &format!("[menu] {:?} -> open={}", e.origin, e.open),
        );
    }

    fn on_anchor_scroll(&mut self, e: &AnchorScrollEvent<'_>) {
        self.emit(
            Level::Debug,
            &format!("[anchor] #{} -> {:.0}", e.fragment, e.destination),
        );
    }

    fn on_field(&mut self, e: &FieldEvent) {
        self.emit(
            Level::Debug,
            &format!("[form] {:?} valid={}", e.field, e.valid),
        );
    }

    fn on_submission(&mut self, e: &SubmissionEvent) {
        self.emit(
            Level::Debug,
            &format!(
                "[form] submit success={} invalid={}",
                e.success, e.invalid_fields
            ),
        );
    }

    fn on_tab(&mut self, e: &TabEvent<'_>) {
        self.emit(
            Level::Debug,
            &format!("[tabs] button={} panel=#{}", e.index, e.panel),
        );
    }

    fn on_tea_cycle(&mut self, e: &TeaCycleEvent) {
        self.emit(
            Level::Debug,
            &format!("[leaf] {} ({})", e.name, e.index),
        );
    }

    fn on_marker(&mut self, e: &MarkerEvent<'_>) {
        let what = if e.scheduled { "navigating" } else { "suppressed" };
        self.emit(
            Level::Debug,
            &format!("[marker] {} {what} -> {}", e.area, e.destination),
        );
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.emit(Level::Debug, &format!("[bgm] {:?}", e.playback));
    }

    fn on_playback_failed(&mut self, e: &PlaybackFailedEvent<'_>) {
        self.emit(Level::Error, &format!("BGM播放失败：{}", e.reason));
    }

    fn on_volume(&mut self, e: &VolumeEvent) {
        self.emit(
            Level::Debug,
            &format!("[bgm] volume {} -> {}", e.requested, e.applied),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_audio_uses_site_wording() {
        let msg = inert_message(&InertEvent {
            feature: Feature::Audio,
            missing: "#bgm-audio",
        });
        assert_eq!(msg, MISSING_AUDIO_DIAGNOSTIC);
    }

    #[test]
    fn other_inert_features_name_the_selector() {
        let msg = inert_message(&InertEvent {
            feature: Feature::Navbar,
            missing: ".navbar",
        });
        assert_eq!(msg, "[navbar] inert: no element matches .navbar");
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Warn, "debug is quietest");
        assert!(Level::Warn < Level::Error, "error is loudest");
    }
}
