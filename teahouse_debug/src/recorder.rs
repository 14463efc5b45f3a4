// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording and JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event, with
//! borrowed strings copied out, to a queue of [`RecordedEvent`]s. A bounded
//! recorder drops its oldest events once full. [`to_json`] turns a recording
//! into a JSON array of objects, one per event, each carrying an `"event"`
//! tag; [`export`] writes that array to a writer.

use std::collections::VecDeque;
use std::io::{self, Write};

use serde_json::{Value, json};

use teahouse_core::audio::Playback;
use teahouse_core::chrome::{ChromeState, ClickOrigin};
use teahouse_core::form::Field;
use teahouse_core::reveal::RevealKind;
use teahouse_core::trace::{
    AnchorScrollEvent, ChromeEvent, Feature, FieldEvent, InertEvent, InitFailedEvent, MarkerEvent,
    MenuEvent, PlaybackEvent, PlaybackFailedEvent, RevealEvent, SubmissionEvent, TabEvent,
    TeaCycleEvent, TraceSink, VolumeEvent,
};

use crate::{chrome_state_name, click_origin_name, field_name, playback_name, reveal_kind_name};

// ---------------------------------------------------------------------------
// RecordedEvent
// ---------------------------------------------------------------------------

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`InertEvent`].
    Inert {
        /// Which component.
        feature: Feature,
        /// Selector that matched nothing.
        missing: &'static str,
    },
    /// An [`InitFailedEvent`].
    InitFailed {
        /// Which component.
        feature: Feature,
        /// Stringified error.
        error: String,
    },
    /// A [`RevealEvent`].
    Reveal {
        /// Which tracker.
        kind: RevealKind,
        /// Revealed slot.
        slot: usize,
        /// Still pending.
        remaining: usize,
    },
    /// A [`ChromeEvent`].
    Chrome {
        /// New state.
        state: ChromeState,
        /// Scroll offset.
        offset: f64,
    },
    /// A [`MenuEvent`].
    Menu {
        /// Click origin.
        origin: ClickOrigin,
        /// Open afterwards.
        open: bool,
    },
    /// An [`AnchorScrollEvent`].
    AnchorScroll {
        /// Target id.
        fragment: String,
        /// Scroll destination.
        destination: f64,
    },
    /// A [`FieldEvent`].
    Field {
        /// Which field.
        field: Field,
        /// Passed?
        valid: bool,
    },
    /// A [`SubmissionEvent`].
    Submission {
        /// All present fields passed.
        success: bool,
        /// Failed field count.
        invalid_fields: usize,
    },
    /// A [`TabEvent`].
    Tab {
        /// Button index.
        index: usize,
        /// Panel id.
        panel: String,
    },
    /// A [`TeaCycleEvent`].
    TeaCycle {
        /// Tea table index.
        index: usize,
        /// Tea name.
        name: &'static str,
    },
    /// A [`MarkerEvent`].
    Marker {
        /// Marker area.
        area: String,
        /// Destination page.
        destination: String,
        /// `false` if suppressed.
        scheduled: bool,
    },
    /// A [`PlaybackEvent`].
    Playback {
        /// Requested state.
        playback: Playback,
    },
    /// A [`PlaybackFailedEvent`].
    PlaybackFailed {
        /// Rejection reason.
        reason: String,
    },
    /// A [`VolumeEvent`].
    Volume {
        /// Raw value.
        requested: f64,
        /// Applied value.
        applied: f64,
    },
}

impl RecordedEvent {
    /// The event's tag in the JSON export.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inert { .. } => "inert",
            Self::InitFailed { .. } => "init_failed",
            Self::Reveal { .. } => "reveal",
            Self::Chrome { .. } => "chrome",
            Self::Menu { .. } => "menu",
            Self::AnchorScroll { .. } => "anchor_scroll",
            Self::Field { .. } => "field",
            Self::Submission { .. } => "submission",
            Self::Tab { .. } => "tab",
            Self::TeaCycle { .. } => "tea_cycle",
            Self::Marker { .. } => "marker",
            Self::Playback { .. } => "playback",
            Self::PlaybackFailed { .. } => "playback_failed",
            Self::Volume { .. } => "volume",
        }
    }

    /// Converts the event to a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let name = self.name();
        match self {
            Self::Inert { feature, missing } => json!({
                "event": name,
                "feature": feature.name(),
                "missing": missing,
            }),
            Self::InitFailed { feature, error } => json!({
                "event": name,
                "feature": feature.name(),
                "error": error,
            }),
            Self::Reveal {
                kind,
                slot,
                remaining,
            } => json!({
                "event": name,
                "kind": reveal_kind_name(*kind),
                "slot": slot,
                "remaining": remaining,
            }),
            Self::Chrome { state, offset } => json!({
                "event": name,
                "state": chrome_state_name(*state),
                "offset": offset,
            }),
            Self::Menu { origin, open } => json!({
                "event": name,
                "origin": click_origin_name(*origin),
                "open": open,
            }),
            Self::AnchorScroll {
                fragment,
                destination,
            } => json!({
                "event": name,
                "fragment": fragment,
                "destination": destination,
            }),
            Self::Field { field, valid } => json!({
                "event": name,
                "field": field_name(*field),
                "valid": valid,
            }),
            Self::Submission {
                success,
                invalid_fields,
            } => json!({
                "event": name,
                "success": success,
                "invalid_fields": invalid_fields,
            }),
            Self::Tab { index, panel } => json!({
                "event": name,
                "index": index,
                "panel": panel,
            }),
            Self::TeaCycle { index, name: tea } => json!({
                "event": name,
                "index": index,
                "name": tea,
            }),
            Self::Marker {
                area,
                destination,
                scheduled,
            } => json!({
                "event": name,
                "area": area,
                "destination": destination,
                "scheduled": scheduled,
            }),
            Self::Playback { playback } => json!({
                "event": name,
                "playback": playback_name(*playback),
            }),
            Self::PlaybackFailed { reason } => json!({
                "event": name,
                "reason": reason,
            }),
            Self::Volume { requested, applied } => json!({
                "event": name,
                "requested": requested,
                "applied": applied,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that keeps events in memory.
///
/// [`new`](Self::new) keeps everything. [`bounded`](Self::bounded) keeps the
/// most recent `limit` events and counts the rest in
/// [`dropped`](Self::dropped).
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: VecDeque<RecordedEvent>,
    limit: Option<usize>,
    dropped: u64,
}

impl RecorderSink {
    /// Creates an empty, unbounded recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recorder that retains at most `limit` events.
    ///
    /// A `limit` of zero records nothing.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(limit),
            limit: Some(limit),
            dropped: 0,
        }
    }

    /// Returns the retained events in arrival order.
    pub fn events(&self) -> impl ExactSizeIterator<Item = &RecordedEvent> + '_ {
        self.events.iter()
    }

    /// Consumes the recorder and returns the retained events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events.into()
    }

    /// Number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events discarded to stay within the limit.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Discards the recording.
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    /// The recording as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        to_json(&self.events)
    }

    fn push(&mut self, event: RecordedEvent) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                self.dropped += 1;
                return;
            }
            while self.events.len() >= limit {
                self.events.pop_front();
                self.dropped += 1;
            }
        }
        self.events.push_back(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_inert(&mut self, e: &InertEvent) {
        self.push(RecordedEvent::Inert {
            feature: e.feature,
            missing: e.missing,
        });
    }

    fn on_init_failed(&mut self, e: &InitFailedEvent<'_>) {
        self.push(RecordedEvent::InitFailed {
            feature: e.feature,
            error: e.error.to_owned(),
        });
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.push(RecordedEvent::Reveal {
            kind: e.kind,
            slot: e.slot,
            remaining: e.remaining,
        });
    }

    fn on_chrome(&mut self, e: &ChromeEvent) {
        self.push(RecordedEvent::Chrome {
            state: e.state,
            offset: e.offset,
        });
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        self.push(RecordedEvent::Menu {
            origin: e.origin,
            open: e.open,
        });
    }

    fn on_anchor_scroll(&mut self, e: &AnchorScrollEvent<'_>) {
        self.push(RecordedEvent::AnchorScroll {
            fragment: e.fragment.to_owned(),
            destination: e.destination,
        });
    }

    fn on_field(&mut self, e: &FieldEvent) {
        self.push(RecordedEvent::Field {
            field: e.field,
            valid: e.valid,
        });
    }

    fn on_submission(&mut self, e: &SubmissionEvent) {
        self.push(RecordedEvent::Submission {
            success: e.success,
            invalid_fields: e.invalid_fields,
        });
    }

    fn on_tab(&mut self, e: &TabEvent<'_>) {
        self.push(RecordedEvent::Tab {
            index: e.index,
            panel: e.panel.to_owned(),
        });
    }

    fn on_tea_cycle(&mut self, e: &TeaCycleEvent) {
        self.push(RecordedEvent::TeaCycle {
            index: e.index,
            name: e.name,
        });
    }

    fn on_marker(&mut self, e: &MarkerEvent<'_>) {
        self.push(RecordedEvent::Marker {
            area: e.area.to_owned(),
            destination: e.destination.to_owned(),
            scheduled: e.scheduled,
        });
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.push(RecordedEvent::Playback {
            playback: e.playback,
        });
    }

    fn on_playback_failed(&mut self, e: &PlaybackFailedEvent<'_>) {
        self.push(RecordedEvent::PlaybackFailed {
            reason: e.reason.to_owned(),
        });
    }

    fn on_volume(&mut self, e: &VolumeEvent) {
        self.push(RecordedEvent::Volume {
            requested: e.requested,
            applied: e.applied,
        });
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Converts a recording to a JSON array.
#[must_use]
pub fn to_json<'a>(events: impl IntoIterator<Item = &'a RecordedEvent>) -> Value {
    Value::Array(events.into_iter().map(RecordedEvent::to_json).collect())
}

/// Writes a recording to `writer` as a pretty-printed JSON array.
pub fn export<'a>(
    events: impl IntoIterator<Item = &'a RecordedEvent>,
    writer: &mut dyn Write,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &to_json(events))?;
    writeln!(writer)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_strings_are_copied() {
        let mut rec = RecorderSink::new();
        {
            let panel = String::from("green-tea");
            rec.on_tab(&TabEvent {
                index: 0,
                panel: &panel,
            });
        }
        assert_eq!(
            rec.into_events(),
            [RecordedEvent::Tab {
                index: 0,
                panel: "green-tea".to_owned(),
            }]
        );
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_playback(&PlaybackEvent {
            playback: Playback::Playing,
        });
        rec.on_playback_failed(&PlaybackFailedEvent {
            reason: "NotAllowedError",
        });
        rec.on_playback(&PlaybackEvent {
            playback: Playback::Paused,
        });
        let names: Vec<_> = rec.events().map(RecordedEvent::name).collect();
        assert_eq!(names, ["playback", "playback_failed", "playback"]);
    }

    #[test]
    fn json_objects_are_tagged() {
        let mut rec = RecorderSink::new();
        rec.on_reveal(&RevealEvent {
            kind: RevealKind::LazyImage,
            slot: 2,
            remaining: 1,
        });
        rec.on_marker(&MarkerEvent {
            area: "anxi",
            destination: "subpages/anxi-detail.html",
            scheduled: true,
        });

        let json = rec.to_json();
        let arr = json.as_array().expect("array");
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["event"], "reveal");
        assert_eq!(arr[0]["kind"], "lazy-image");
        assert_eq!(arr[0]["slot"], 2);
        assert_eq!(arr[1]["event"], "marker");
        assert_eq!(arr[1]["destination"], "subpages/anxi-detail.html");
        assert_eq!(arr[1]["scheduled"], true);
    }

    #[test]
    fn export_writes_parseable_json() {
        let mut rec = RecorderSink::new();
        rec.on_inert(&InertEvent {
            feature: Feature::Audio,
            missing: "#bgm-audio",
        });
        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["feature"], "audio");
        assert_eq!(parsed[0]["missing"], "#bgm-audio");
    }

    #[test]
    fn empty_recording_is_empty_array() {
        let rec = RecorderSink::new();
        assert!(rec.is_empty());
        assert_eq!(rec.to_json(), json!([]));
    }

    #[test]
    fn clear_discards_events() {
        let mut rec = RecorderSink::new();
        rec.on_volume(&VolumeEvent {
            requested: 1.5,
            applied: 1.0,
        });
        assert_eq!(rec.len(), 1);
        rec.clear();
        assert!(rec.is_empty());
    }

    fn volume(requested: f64) -> VolumeEvent {
        VolumeEvent {
            requested,
            applied: requested.clamp(0.0, 1.0),
        }
    }

    #[test]
    fn bounded_recorder_keeps_the_newest_events() {
        let mut rec = RecorderSink::bounded(3);
        // A slider drag emits one event per input.
        for step in 0..10 {
            rec.on_volume(&volume(f64::from(step) / 10.0));
        }
        assert_eq!(rec.len(), 3, "never grows past the limit");
        assert_eq!(rec.dropped(), 7);
        let kept: Vec<f64> = rec
            .events()
            .map(|e| match e {
                RecordedEvent::Volume { requested, .. } => *requested,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(kept, [0.7, 0.8, 0.9], "oldest are dropped first");
        assert_eq!(rec.to_json().as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut rec = RecorderSink::bounded(0);
        rec.on_volume(&volume(0.5));
        assert!(rec.is_empty());
        assert_eq!(rec.dropped(), 1);
    }

    #[test]
    fn unbounded_recorder_drops_nothing() {
        let mut rec = RecorderSink::new();
        for _ in 0..100 {
            rec.on_volume(&volume(0.5));
        }
        assert_eq!(rec.len(), 100);
        assert_eq!(rec.dropped(), 0);
    }
}
