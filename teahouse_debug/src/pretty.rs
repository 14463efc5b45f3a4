// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use teahouse_core::trace::{
    AnchorScrollEvent, ChromeEvent, FieldEvent, InertEvent, InitFailedEvent, MarkerEvent,
    MenuEvent, PlaybackEvent, PlaybackFailedEvent, RevealEvent, SubmissionEvent, TabEvent,
    TeaCycleEvent, TraceSink, VolumeEvent,
};

use crate::{chrome_state_name, click_origin_name, field_name, playback_name, reveal_kind_name};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ok(valid: bool) -> &'static str {
    if valid { "ok" } else { "INVALID" }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_inert(&mut self, e: &InertEvent) {
        let _ = writeln!(
            self.writer,
            "[inert] {} missing={}",
            e.feature.name(),
            e.missing,
        );
    }

    fn on_init_failed(&mut self, e: &InitFailedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[init:FAILED] {} error={}",
            e.feature.name(),
            e.error,
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] {} slot={} remaining={}",
            reveal_kind_name(e.kind),
            e.slot,
            e.remaining,
        );
    }

    fn on_chrome(&mut self, e: &ChromeEvent) {
        let _ = writeln!(
            self.writer,
            "[chrome] {} offset={:.1}",
            chrome_state_name(e.state),
            e.offset,
        );
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        let state = if e.open { "open" } else { "closed" };
        let _ = writeln!(
            self.writer,
            "[menu] {} -> {state}",
            click_origin_name(e.origin),
        );
    }

    fn on_anchor_scroll(&mut self, e: &AnchorScrollEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[anchor] #{} to={:.1}",
            e.fragment, e.destination,
        );
    }

    fn on_field(&mut self, e: &FieldEvent) {
        let _ = writeln!(
            self.writer,
            "[field] {} {}",
            field_name(e.field),
            ok(e.valid),
        );
    }

    fn on_submission(&mut self, e: &SubmissionEvent) {
        let _ = writeln!(
            self.writer,
            "[submit] {} invalid={}",
            ok(e.success),
            e.invalid_fields,
        );
    }

    fn on_tab(&mut self, e: &TabEvent<'_>) {
        let _ = writeln!(self.writer, "[tab] button={} panel=#{}", e.index, e.panel);
    }

    fn on_tea_cycle(&mut self, e: &TeaCycleEvent) {
        let _ = writeln!(self.writer, "[tea] index={} name={}", e.index, e.name);
    }

    fn on_marker(&mut self, e: &MarkerEvent<'_>) {
        let what = if e.scheduled { "scheduled" } else { "suppressed" };
        let _ = writeln!(
            self.writer,
            "[marker] area={} {what} -> {}",
            e.area, e.destination,
        );
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        let _ = writeln!(self.writer, "[playback] {}", playback_name(e.playback));
    }

    fn on_playback_failed(&mut self, e: &PlaybackFailedEvent<'_>) {
        let _ = writeln!(self.writer, "[playback:FAILED] reason={}", e.reason);
    }

    fn on_volume(&mut self, e: &VolumeEvent) {
        let _ = writeln!(
            self.writer,
            "[volume] requested={} applied={}",
            e.requested, e.applied,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teahouse_core::chrome::{ChromeState, ClickOrigin};
    use teahouse_core::trace::Feature;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_chrome() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_chrome(&ChromeEvent {
            state: ChromeState::Scrolled,
            offset: 101.0,
        });
        let out = output(sink);
        assert_eq!(out, "[chrome] scrolled offset=101.0\n", "got: {out}");
    }

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_inert(&InertEvent {
            feature: Feature::Leaf,
            missing: "#leaf-element",
        });
        sink.on_menu(&MenuEvent {
            origin: ClickOrigin::Outside,
            open: false,
        });
        sink.on_marker(&MarkerEvent {
            area: "hangzhou",
            destination: "subpages/hangzhou-detail.html",
            scheduled: false,
        });
        let out = output(sink);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "got: {out}");
        assert_eq!(lines[0], "[inert] leaf missing=#leaf-element");
        assert_eq!(lines[1], "[menu] outside -> closed");
        assert!(lines[2].contains("suppressed"), "got: {}", lines[2]);
    }

    #[test]
    fn failures_are_marked() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_playback_failed(&PlaybackFailedEvent {
            reason: "NotAllowedError",
        });
        sink.on_submission(&SubmissionEvent {
            success: false,
            invalid_fields: 2,
        });
        let out = output(sink);
        assert!(out.contains("[playback:FAILED] reason=NotAllowedError"), "got: {out}");
        assert!(out.contains("[submit] INVALID invalid=2"), "got: {out}");
    }

    #[test]
    fn startup_failure_is_not_blamed_on_a_component() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_init_failed(&InitFailedEvent {
            feature: Feature::Startup,
            error: "no document",
        });
        let out = output(sink);
        assert_eq!(out, "[init:FAILED] startup error=no document\n", "got: {out}");
    }
}
