// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility observation.
//!
//! [`VisibilityObserver`] watches a fixed list of elements and calls its
//! handler once per element, the first time that element is visible past the
//! threshold. Revealed elements are unobserved immediately.
//!
//! With `IntersectionObserver` available the browser delivers the samples.
//! Otherwise the observer falls back to polling bounding rects on `scroll`
//! and `resize` (and once at start), using
//! [`teahouse_core::reveal::sample_from_rects`].

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::Rect;
use teahouse_core::reveal::{RevealKind, RevealTracker, VisibilitySample, sample_from_rects};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{has_global, window};
use crate::error::DomError;

/// Browsers report `intersectionRatio` with float noise right at the
/// threshold; ratios this close count as reaching it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Passed to the reveal handler.
#[derive(Debug)]
pub struct Reveal<'a> {
    /// The element that became visible.
    pub element: &'a Element,
    /// Its slot in the observed list.
    pub slot: usize,
    /// Elements still pending after this one.
    pub remaining: usize,
}

type RevealHandler = Box<dyn FnMut(Reveal<'_>)>;
type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type PollClosure = Closure<dyn FnMut(Event)>;

/// Watches elements and reports each one's first appearance.
///
/// Dropping the observer disconnects it. Page-lifetime observers are kept
/// alive with [`core::mem::forget`].
pub struct VisibilityObserver {
    inner: Rc<ObserverInner>,
}

struct ObserverInner {
    targets: Vec<Element>,
    tracker: RefCell<RevealTracker>,
    handler: RefCell<RevealHandler>,
    io: RefCell<Option<(IntersectionObserver, ObserverClosure)>>,
    poll: RefCell<Option<PollClosure>>,
}

impl VisibilityObserver {
    /// Starts watching `targets`.
    ///
    /// An empty `targets` list is valid and observes nothing.
    pub fn start(
        targets: Vec<Element>,
        kind: RevealKind,
        threshold: f64,
        handler: impl FnMut(Reveal<'_>) + 'static,
    ) -> Result<Self, DomError> {
        let tracker = RevealTracker::new(kind, targets.len(), threshold);
        let observer = Self {
            inner: Rc::new(ObserverInner {
                targets,
                tracker: RefCell::new(tracker),
                handler: RefCell::new(Box::new(handler)),
                io: RefCell::new(None),
                poll: RefCell::new(None),
            }),
        };
        if observer.inner.targets.is_empty() {
            return Ok(observer);
        }

        if has_global(&window()?, "IntersectionObserver") {
            observer.start_intersection(threshold)?;
        } else {
            observer.start_polling()?;
        }
        Ok(observer)
    }

    fn start_intersection(&self, threshold: f64) -> Result<(), DomError> {
        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, io: IntersectionObserver| {
                let mut samples = Vec::new();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if let Some(slot) = inner.slot_of(&target) {
                        samples.push(VisibilitySample {
                            slot,
                            intersecting: entry.is_intersecting(),
                            ratio: (entry.intersection_ratio() + RATIO_TOLERANCE).min(1.0),
                        });
                    }
                }
                inner.apply(&samples, |el| io.unobserve(el));
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin("0px");
        init.set_threshold(&JsValue::from_f64(threshold));
        let io = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        for target in &self.inner.targets {
            io.observe(target);
        }
        *self.inner.io.borrow_mut() = Some((io, closure));
        Ok(())
    }

    fn start_polling(&self) -> Result<(), DomError> {
        let window = window()?;
        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            inner.poll();
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        *self.inner.poll.borrow_mut() = Some(closure);
        self.inner.poll();
        Ok(())
    }

    /// Number of elements not yet revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.tracker.borrow().pending()
    }

    /// Returns `true` when the browser's `IntersectionObserver` is in use.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.inner.io.borrow().is_some()
    }
}

impl ObserverInner {
    fn slot_of(&self, el: &Element) -> Option<usize> {
        self.targets.iter().position(|t| t == el)
    }

    /// Feeds samples to the tracker, then runs `unobserve` and the handler for
    /// every newly revealed element. The tracker borrow is released before
    /// the handler runs.
    fn apply(&self, samples: &[VisibilitySample], mut unobserve: impl FnMut(&Element)) {
        let mut revealed = Vec::new();
        {
            let mut tracker = self.tracker.borrow_mut();
            for sample in samples {
                if tracker.observe(sample) {
                    revealed.push((sample.slot, tracker.pending()));
                }
            }
        }
        for (slot, remaining) in revealed {
            let element = &self.targets[slot];
            unobserve(element);
            self.handler.borrow_mut()(Reveal {
                element,
                slot,
                remaining,
            });
        }
        if self.tracker.borrow().is_settled() {
            self.stop_polling();
        }
    }

    fn poll(&self) {
        let Some(viewport) = viewport() else {
            return;
        };
        let samples: Vec<VisibilitySample> = {
            let tracker = self.tracker.borrow();
            tracker
                .pending_slots()
                .map(|slot| sample_from_rects(slot, layout_rect(&self.targets[slot]), viewport))
                .collect()
        };
        self.apply(&samples, |_| {});
    }

    /// Removes the polling listeners. The closure itself stays stored, since
    /// this may run from inside it; [`Drop`] releases it.
    fn stop_polling(&self) {
        let poll = self.poll.borrow();
        let Some(closure) = poll.as_ref() else {
            return;
        };
        if let Ok(window) = window() {
            let f = closure.as_ref().unchecked_ref();
            let _ = window.remove_event_listener_with_callback("scroll", f);
            let _ = window.remove_event_listener_with_callback("resize", f);
        }
    }
}

/// Bounding rect of `el`, or `None` when it has no layout box. Hidden
/// elements report an all-zero rect at the origin.
fn layout_rect(el: &Element) -> Option<Rect> {
    if el.get_client_rects().length() == 0 {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
}

fn viewport() -> Option<Rect> {
    let window = window().ok()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        if let Some((io, _closure)) = self.inner.io.borrow_mut().take() {
            io.disconnect();
        }
        self.inner.stop_polling();
        // Break the Rc cycle between the inner state and its closures.
        self.inner.poll.borrow_mut().take();
    }
}

impl core::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tracker = self.inner.tracker.borrow();
        f.debug_struct("VisibilityObserver")
            .field("kind", &tracker.kind())
            .field("targets", &tracker.len())
            .field("pending", &tracker.pending())
            .field("native", &self.is_native())
            .finish()
    }
}
