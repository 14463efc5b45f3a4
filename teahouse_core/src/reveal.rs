// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility reveal tracking.
//!
//! A [`RevealTracker`] owns the state of a fixed set of targets, addressed by
//! slot index in the order they were found in the document. Every target
//! starts [`Pending`](RevealState::Pending) and moves to
//! [`Revealed`](RevealState::Revealed) the first time it is reported visible
//! past the tracker's threshold. The transition happens at most once per
//! target; later reports for a revealed slot are ignored, which is what lets
//! the backend stop observing the element.
//!
//! Two trackers exist on a page, one per [`RevealKind`]. Their side effects
//! differ (a CSS class vs. swapping in a real image source) but the contract is
//! identical.
//!
//! [`visible_fraction`] computes the area-weighted share of an element inside
//! the viewport. Browsers with `IntersectionObserver` supply this ratio
//! directly; the scroll-polling fallback computes it from bounding rects.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

/// Which reveal behavior a tracker drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Adds the `visible` class to start a CSS transition.
    FadeIn,
    /// Replaces a placeholder image source with the real one.
    LazyImage,
}

/// Per-target reveal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Still being observed.
    Pending,
    /// Already revealed; never observed again.
    Revealed,
}

/// One visibility report for a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilitySample {
    /// Slot index of the target.
    pub slot: usize,
    /// Whether the browser considers the target intersecting.
    pub intersecting: bool,
    /// Fraction of the target's area on screen, `0.0..=1.0`.
    pub ratio: f64,
}

/// Tracks pending/revealed state for a fixed set of targets.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    kind: RevealKind,
    threshold: f64,
    states: Vec<RevealState>,
}

impl RevealTracker {
    /// Creates a tracker for `targets` elements, all pending.
    ///
    /// `threshold` is the visible fraction required for a reveal. A threshold
    /// of `0.0` reveals as soon as the browser reports an intersection.
    #[must_use]
    pub fn new(kind: RevealKind, targets: usize, threshold: f64) -> Self {
        Self {
            kind,
            threshold: threshold.clamp(0.0, 1.0),
            states: vec![RevealState::Pending; targets],
        }
    }

    /// The behavior this tracker drives.
    #[must_use]
    pub const fn kind(&self) -> RevealKind {
        self.kind
    }

    /// The effective visibility threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of targets the tracker was created with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if there are no targets at all.
    ///
    /// An empty tracker is valid; the component is then a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of `slot`, or `None` if the slot does not exist.
    #[must_use]
    pub fn state(&self, slot: usize) -> Option<RevealState> {
        self.states.get(slot).copied()
    }

    /// Number of targets still pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }

    /// Returns `true` once every target has been revealed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending() == 0
    }

    /// Returns `true` if `sample` counts as visible under this threshold.
    #[must_use]
    pub fn crosses(&self, sample: &VisibilitySample) -> bool {
        if !sample.intersecting {
            return false;
        }
        // Zero threshold means "any intersection", including zero-area edges.
        self.threshold == 0.0 || sample.ratio >= self.threshold
    }

    /// Applies one report. Returns `true` if this report revealed the target,
    /// in which case the caller applies the side effect and stops observing.
    pub fn observe(&mut self, sample: &VisibilitySample) -> bool {
        if !self.crosses(sample) {
            return false;
        }
        match self.states.get_mut(sample.slot) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Iterates over the slots still pending.
    pub fn pending_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == RevealState::Pending)
            .map(|(i, _)| i)
    }
}

/// Fraction of `element`'s area that lies inside `viewport`.
///
/// Zero-area elements count as fully visible when they touch the viewport,
/// matching the browser's treatment of empty boxes.
#[must_use]
pub fn visible_fraction(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let viewport = viewport.abs();
    if !touches(element, viewport) {
        return 0.0;
    }
    let area = element.area();
    if area <= 0.0 {
        return 1.0;
    }
    (element.intersect(viewport).area() / area).clamp(0.0, 1.0)
}

/// Builds a [`VisibilitySample`] from bounding rects, for polling fallbacks.
///
/// `element` is `None` for targets that produce no layout box
/// (`display: none` or detached), which never intersect. Edge-adjacent rects
/// intersect with a ratio of zero, as in the browser.
#[must_use]
pub fn sample_from_rects(slot: usize, element: Option<Rect>, viewport: Rect) -> VisibilitySample {
    let Some(element) = element else {
        return VisibilitySample {
            slot,
            intersecting: false,
            ratio: 0.0,
        };
    };
    let element = element.abs();
    let viewport = viewport.abs();
    VisibilitySample {
        slot,
        intersecting: touches(element, viewport),
        ratio: visible_fraction(element, viewport),
    }
}

fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(slot: usize, ratio: f64) -> VisibilitySample {
        VisibilitySample {
            slot,
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn reveals_each_target_at_most_once() {
        let mut tracker = RevealTracker::new(RevealKind::FadeIn, 3, 0.1);
        let mut reveals = [0_u32; 3];
        // Cross the threshold repeatedly in and out.
        for round in 0..5 {
            for slot in 0..3 {
                let ratio = if round % 2 == 0 { 0.5 } else { 0.0 };
                if tracker.observe(&seen(slot, ratio)) {
                    reveals[slot] += 1;
                }
            }
        }
        assert_eq!(reveals, [1, 1, 1], "every target revealed exactly once");
        assert!(tracker.is_settled(), "all targets revealed");
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new(RevealKind::FadeIn, 1, 0.1);
        assert!(!tracker.observe(&seen(0, 0.05)), "5% is under 10%");
        assert_eq!(tracker.state(0), Some(RevealState::Pending));
        assert!(tracker.observe(&seen(0, 0.1)), "exactly 10% reveals");
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));
    }

    #[test]
    fn zero_threshold_reveals_on_any_intersection() {
        let mut tracker = RevealTracker::new(RevealKind::LazyImage, 1, 0.0);
        let edge = VisibilitySample {
            slot: 0,
            intersecting: true,
            ratio: 0.0,
        };
        assert!(tracker.observe(&edge), "edge contact reveals a lazy image");
    }

    #[test]
    fn not_intersecting_never_reveals() {
        let mut tracker = RevealTracker::new(RevealKind::LazyImage, 1, 0.0);
        let away = VisibilitySample {
            slot: 0,
            intersecting: false,
            ratio: 1.0,
        };
        assert!(!tracker.observe(&away), "intersecting flag wins");
    }

    #[test]
    fn empty_tracker_is_a_noop() {
        let mut tracker = RevealTracker::new(RevealKind::FadeIn, 0, 0.1);
        assert!(tracker.is_empty(), "no targets");
        assert!(tracker.is_settled(), "nothing pending");
        assert!(!tracker.observe(&seen(0, 1.0)), "unknown slot is ignored");
    }

    #[test]
    fn pending_slots_shrink_as_targets_reveal() {
        let mut tracker = RevealTracker::new(RevealKind::FadeIn, 4, 0.1);
        tracker.observe(&seen(1, 1.0));
        tracker.observe(&seen(3, 1.0));
        let pending: Vec<usize> = tracker.pending_slots().collect();
        assert_eq!(pending, [0, 2]);
    }

    #[test]
    fn fraction_of_half_visible_element() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(0.0, 500.0, 100.0, 700.0);
        let f = visible_fraction(element, viewport);
        assert!((f - 0.5).abs() < 1e-9, "got {f}");
    }

    #[test]
    fn fraction_outside_viewport_is_zero() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(0.0, 900.0, 100.0, 1000.0);
        assert_eq!(visible_fraction(element, viewport), 0.0);
        let sample = sample_from_rects(0, Some(element), viewport);
        assert!(!sample.intersecting, "element below the fold");
    }

    #[test]
    fn element_without_layout_box_is_never_revealed() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let hidden = sample_from_rects(0, None, viewport);
        assert!(!hidden.intersecting, "no box, no intersection");
        assert_eq!(hidden.ratio, 0.0);

        let mut lazy = RevealTracker::new(RevealKind::LazyImage, 1, 0.0);
        let mut fade = RevealTracker::new(RevealKind::FadeIn, 1, 0.1);
        assert!(!lazy.observe(&hidden), "hidden image does not load");
        assert!(!fade.observe(&hidden), "hidden section does not fade in");
        assert_eq!(lazy.state(0), Some(RevealState::Pending));
    }

    #[test]
    fn rendered_empty_box_on_screen_still_counts() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let sample = sample_from_rects(0, Some(Rect::new(20.0, 20.0, 20.0, 20.0)), viewport);
        assert!(sample.intersecting, "laid out inside the viewport");
        assert_eq!(sample.ratio, 1.0);
    }

    #[test]
    fn fraction_fully_inside_is_one() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(10.0, 10.0, 110.0, 60.0);
        assert_eq!(visible_fraction(element, viewport), 1.0);
    }

    #[test]
    fn threshold_is_clamped() {
        let tracker = RevealTracker::new(RevealKind::FadeIn, 1, 3.0);
        assert_eq!(tracker.threshold(), 1.0);
    }
}
