// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the page components.
//!
//! This module provides a [`TraceSink`] trait with one method per event the
//! components emit. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::audio::Playback;
use crate::chrome::{ChromeState, ClickOrigin};
use crate::form::Field;
use crate::reveal::RevealKind;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A page component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Scroll-reactive navigation bar.
    Navbar,
    /// Hamburger menu.
    MobileMenu,
    /// Fade-in sections.
    FadeIn,
    /// Deferred images.
    LazyImages,
    /// Fragment link scrolling.
    SmoothScroll,
    /// Contact form validation.
    ContactForm,
    /// Tea tabs.
    Tabs,
    /// Color-cycling leaf.
    Leaf,
    /// Map markers.
    Markers,
    /// Background music.
    Audio,
    /// Loading curtain.
    PageLoader,
    /// Entry point work shared by every component, such as reaching the
    /// document.
    Startup,
}

impl Feature {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::MobileMenu => "mobile-menu",
            Self::FadeIn => "fade-in",
            Self::LazyImages => "lazy-images",
            Self::SmoothScroll => "smooth-scroll",
            Self::ContactForm => "contact-form",
            Self::Tabs => "tabs",
            Self::Leaf => "leaf",
            Self::Markers => "markers",
            Self::Audio => "audio",
            Self::PageLoader => "page-loader",
            Self::Startup => "startup",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// A component found none of its required elements and stays inert.
#[derive(Clone, Copy, Debug)]
pub struct InertEvent {
    /// Which component.
    pub feature: Feature,
    /// Selector that matched nothing.
    pub missing: &'static str,
}

/// A component failed to initialize (a DOM call threw).
#[derive(Clone, Copy, Debug)]
pub struct InitFailedEvent<'a> {
    /// Which component.
    pub feature: Feature,
    /// Stringified error.
    pub error: &'a str,
}

/// A reveal target became visible for the first time.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// Which tracker.
    pub kind: RevealKind,
    /// Slot of the revealed target.
    pub slot: usize,
    /// Targets still pending afterwards.
    pub remaining: usize,
}

/// The navigation bar changed state.
#[derive(Clone, Copy, Debug)]
pub struct ChromeEvent {
    /// New state.
    pub state: ChromeState,
    /// Scroll offset that caused it.
    pub offset: f64,
}

/// The mobile menu changed state.
#[derive(Clone, Copy, Debug)]
pub struct MenuEvent {
    /// Where the click landed.
    pub origin: ClickOrigin,
    /// Open state after the click.
    pub open: bool,
}

/// A fragment link started an animated scroll.
#[derive(Clone, Copy, Debug)]
pub struct AnchorScrollEvent<'a> {
    /// Target element id.
    pub fragment: &'a str,
    /// Scroll destination.
    pub destination: f64,
}

/// One field was checked during a submission attempt.
#[derive(Clone, Copy, Debug)]
pub struct FieldEvent {
    /// Which field.
    pub field: Field,
    /// Whether it passed.
    pub valid: bool,
}

/// A submission attempt finished.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionEvent {
    /// Whether every present field passed.
    pub success: bool,
    /// Number of fields that failed.
    pub invalid_fields: usize,
}

/// A tab was activated.
#[derive(Clone, Copy, Debug)]
pub struct TabEvent<'a> {
    /// Button index.
    pub index: usize,
    /// Panel id.
    pub panel: &'a str,
}

/// The leaf advanced to another tea.
#[derive(Clone, Copy, Debug)]
pub struct TeaCycleEvent {
    /// New index into the tea table.
    pub index: usize,
    /// Tea name.
    pub name: &'static str,
}

/// A marker click was handled.
#[derive(Clone, Copy, Debug)]
pub struct MarkerEvent<'a> {
    /// The marker's area.
    pub area: &'a str,
    /// Destination page.
    pub destination: &'a str,
    /// `false` if a navigation was already pending and this click was ignored.
    pub scheduled: bool,
}

/// Playback was toggled.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackEvent {
    /// Requested state.
    pub playback: Playback,
}

/// The browser refused to start playback.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackFailedEvent<'a> {
    /// Stringified rejection reason.
    pub reason: &'a str,
}

/// The volume slider was moved.
#[derive(Clone, Copy, Debug)]
pub struct VolumeEvent {
    /// Raw slider value.
    pub requested: f64,
    /// Value applied after clamping.
    pub applied: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostics from the page components.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a component stays inert for lack of markup.
    fn on_inert(&mut self, e: &InertEvent) {
        _ = e;
    }

    /// Called when a component failed to initialize.
    fn on_init_failed(&mut self, e: &InitFailedEvent<'_>) {
        _ = e;
    }

    /// Called when a reveal target is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the navigation bar changes state.
    fn on_chrome(&mut self, e: &ChromeEvent) {
        _ = e;
    }

    /// Called when the mobile menu changes state.
    fn on_menu(&mut self, e: &MenuEvent) {
        _ = e;
    }

    /// Called when a fragment scroll starts.
    fn on_anchor_scroll(&mut self, e: &AnchorScrollEvent<'_>) {
        _ = e;
    }

    /// Called for each field checked on submit.
    fn on_field(&mut self, e: &FieldEvent) {
        _ = e;
    }

    /// Called at the end of each submission attempt.
    fn on_submission(&mut self, e: &SubmissionEvent) {
        _ = e;
    }

    /// Called when a tab is activated.
    fn on_tab(&mut self, e: &TabEvent<'_>) {
        _ = e;
    }

    /// Called when the leaf advances.
    fn on_tea_cycle(&mut self, e: &TeaCycleEvent) {
        _ = e;
    }

    /// Called for each complete marker click.
    fn on_marker(&mut self, e: &MarkerEvent<'_>) {
        _ = e;
    }

    /// Called when playback is toggled.
    fn on_playback(&mut self, e: &PlaybackEvent) {
        _ = e;
    }

    /// Called when a play request is rejected.
    fn on_playback_failed(&mut self, e: &PlaybackFailedEvent<'_>) {
        _ = e;
    }

    /// Called when a volume is applied.
    fn on_volume(&mut self, e: &VolumeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Expands to a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $hook:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$hook(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits an [`InertEvent`].
        inert => on_inert(InertEvent)
    );
    forward!(
        /// Emits an [`InitFailedEvent`].
        init_failed => on_init_failed(InitFailedEvent<'_>)
    );
    forward!(
        /// Emits a [`RevealEvent`].
        reveal => on_reveal(RevealEvent)
    );
    forward!(
        /// Emits a [`ChromeEvent`].
        chrome => on_chrome(ChromeEvent)
    );
    forward!(
        /// Emits a [`MenuEvent`].
        menu => on_menu(MenuEvent)
    );
    forward!(
        /// Emits an [`AnchorScrollEvent`].
        anchor_scroll => on_anchor_scroll(AnchorScrollEvent<'_>)
    );
    forward!(
        /// Emits a [`FieldEvent`].
        field => on_field(FieldEvent)
    );
    forward!(
        /// Emits a [`SubmissionEvent`].
        submission => on_submission(SubmissionEvent)
    );
    forward!(
        /// Emits a [`TabEvent`].
        tab => on_tab(TabEvent<'_>)
    );
    forward!(
        /// Emits a [`TeaCycleEvent`].
        tea_cycle => on_tea_cycle(TeaCycleEvent)
    );
    forward!(
        /// Emits a [`MarkerEvent`].
        marker => on_marker(MarkerEvent<'_>)
    );
    forward!(
        /// Emits a [`PlaybackEvent`].
        playback => on_playback(PlaybackEvent)
    );
    forward!(
        /// Emits a [`PlaybackFailedEvent`].
        playback_failed => on_playback_failed(PlaybackFailedEvent<'_>)
    );
    forward!(
        /// Emits a [`VolumeEvent`].
        volume => on_volume(VolumeEvent)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_inert(&InertEvent {
            feature: Feature::Audio,
            missing: "#bgm-audio",
        });
        sink.on_submission(&SubmissionEvent {
            success: true,
            invalid_fields: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.chrome(&ChromeEvent {
            state: ChromeState::Scrolled,
            offset: 240.0,
        });
        tracer.volume(&VolumeEvent {
            requested: 2.0,
            applied: 1.0,
        });
    }

    #[test]
    fn feature_names_are_distinct() {
        let all = [
            Feature::Navbar,
            Feature::MobileMenu,
            Feature::FadeIn,
            Feature::LazyImages,
            Feature::SmoothScroll,
            Feature::ContactForm,
            Feature::Tabs,
            Feature::Leaf,
            Feature::Markers,
            Feature::Audio,
            Feature::PageLoader,
            Feature::Startup,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name(), "{a:?} vs {b:?}");
            }
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            reveals: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_reveal(&mut self, e: &RevealEvent) {
                self.reveals.push(e.slot);
            }
        }

        let mut sink = RecordingSink {
            reveals: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal(&RevealEvent {
            kind: RevealKind::FadeIn,
            slot: 3,
            remaining: 0,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.reveals, &[3]);
    }
}
