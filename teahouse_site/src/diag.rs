// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide diagnostics.
//!
//! Every component reports through [`trace`], which hands a [`Tracer`] over a
//! sink that writes to the console and keeps an in-memory recording of the
//! visit. [`crate::diagnostics_json`] exports that recording, which holds the
//! most recent [`RECORDING_LIMIT`] events.

use std::cell::RefCell;

use teahouse_backend_web::{ConsoleSink, DomError};
use teahouse_core::trace::{
    AnchorScrollEvent, ChromeEvent, Feature, FieldEvent, InertEvent, InitFailedEvent, MarkerEvent,
    MenuEvent, PlaybackEvent, PlaybackFailedEvent, RevealEvent, SubmissionEvent, TabEvent,
    TeaCycleEvent, TraceSink, Tracer, VolumeEvent,
};
use teahouse_debug::recorder::RecorderSink;

/// Events kept for [`crate::diagnostics_json`]; older ones are dropped.
pub(crate) const RECORDING_LIMIT: usize = 512;

/// Console output plus a recording of the same events.
#[derive(Debug)]
struct SiteSink {
    console: ConsoleSink,
    recorder: RecorderSink,
}

impl SiteSink {
    fn new() -> Self {
        Self {
            console: ConsoleSink::new(),
            recorder: RecorderSink::bounded(RECORDING_LIMIT),
        }
    }
}

/// Expands to a `TraceSink` method that hands the event to both sinks.
macro_rules! tee {
    ($($hook:ident($ty:ty)),* $(,)?) => {
        $(
            fn $hook(&mut self, e: &$ty) {
                self.console.$hook(e);
                self.recorder.$hook(e);
            }
        )*
    };
}

impl TraceSink for SiteSink {
    tee!(
        on_inert(InertEvent),
        on_init_failed(InitFailedEvent<'_>),
        on_reveal(RevealEvent),
        on_chrome(ChromeEvent),
        on_menu(MenuEvent),
        on_anchor_scroll(AnchorScrollEvent<'_>),
        on_field(FieldEvent),
        on_submission(SubmissionEvent),
        on_tab(TabEvent<'_>),
        on_tea_cycle(TeaCycleEvent),
        on_marker(MarkerEvent<'_>),
        on_playback(PlaybackEvent),
        on_playback_failed(PlaybackFailedEvent<'_>),
        on_volume(VolumeEvent),
    );
}

thread_local! {
    static SINK: RefCell<SiteSink> = RefCell::new(SiteSink::new());
}

/// Runs `f` with a tracer over the page sink.
///
/// A nested call (an event emitted while another is being handled) is
/// dropped.
pub(crate) fn trace(f: impl FnOnce(&mut Tracer<'_>)) {
    SINK.with(|sink| {
        if let Ok(mut sink) = sink.try_borrow_mut() {
            let mut tracer = Tracer::new(&mut *sink);
            f(&mut tracer);
        }
    });
}

/// Reports that `feature` found no `missing` element.
pub(crate) fn inert(feature: Feature, missing: &'static str) {
    trace(|t| t.inert(&InertEvent { feature, missing }));
}

/// Reports a DOM failure in `feature`.
pub(crate) fn failed(feature: Feature, error: &DomError) {
    let error = error.to_string();
    trace(|t| {
        t.init_failed(&InitFailedEvent {
            feature,
            error: &error,
        });
    });
}

/// Reports `result` if it is an error.
pub(crate) fn check(feature: Feature, result: Result<(), DomError>) {
    if let Err(err) = result {
        failed(feature, &err);
    }
}

pub(crate) fn set_verbose(verbose: bool) {
    SINK.with(|sink| {
        if let Ok(mut sink) = sink.try_borrow_mut() {
            sink.console = if verbose {
                ConsoleSink::verbose()
            } else {
                ConsoleSink::new()
            };
        }
    });
}

pub(crate) fn recording_json() -> String {
    SINK.with(|sink| {
        sink.try_borrow()
            .map(|sink| sink.recorder.to_json().to_string())
            .unwrap_or_else(|_| String::from("[]"))
    })
}
