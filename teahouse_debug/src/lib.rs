// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for teahouse diagnostics.
//!
//! This crate provides [`TraceSink`](teahouse_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording of owned
//!   [`recorder::RecordedEvent`]s, exportable as a JSON array.

pub mod pretty;
pub mod recorder;

use teahouse_core::audio::Playback;
use teahouse_core::chrome::{ChromeState, ClickOrigin};
use teahouse_core::form::Field;
use teahouse_core::reveal::RevealKind;

/// Stable lowercase names shared by the pretty printer and the JSON export.
pub(crate) fn reveal_kind_name(kind: RevealKind) -> &'static str {
    match kind {
        RevealKind::FadeIn => "fade-in",
        RevealKind::LazyImage => "lazy-image",
    }
}

pub(crate) fn chrome_state_name(state: ChromeState) -> &'static str {
    match state {
        ChromeState::Unscrolled => "unscrolled",
        ChromeState::Scrolled => "scrolled",
    }
}

pub(crate) fn click_origin_name(origin: ClickOrigin) -> &'static str {
    match origin {
        ClickOrigin::Toggle => "toggle",
        ClickOrigin::NavLink => "nav-link",
        ClickOrigin::Menu => "menu",
        ClickOrigin::Outside => "outside",
    }
}

pub(crate) fn field_name(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Message => "message",
    }
}

pub(crate) fn playback_name(playback: Playback) -> &'static str {
    match playback {
        Playback::Playing => "playing",
        Playback::Paused => "paused",
    }
}
