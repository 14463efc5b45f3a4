// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-independent state and rules for the tea culture site.
//!
//! `teahouse_core` holds every decision the page scripts make, separated from
//! the DOM mutations that display them. It is `no_std` compatible (with
//! `alloc`), so all of it can be unit tested on the host.
//!
//! # Architecture
//!
//! Each page component is a browser event feeding a small state value that
//! returns what should change on screen:
//!
//! ```text
//!   DOM event (scroll, click, input, submit, intersection)
//!       │
//!       ▼
//!   core state / rule ──► outcome ──► backend renders it
//!       │
//!       ▼
//!   Tracer ──► TraceSink (console, recorder)
//! ```
//!
//! **[`reveal`]**: One-shot visibility tracking for fade-in sections and
//! lazy images, plus the visible-fraction math used when the browser has no
//! `IntersectionObserver`.
//!
//! **[`chrome`]**: Scroll state of the navigation bar and the mobile menu
//! state machine.
//!
//! **[`anchor`]**: In-page fragment resolution and scroll destination.
//!
//! **[`form`]**: Contact form validation, kept apart from rendering.
//!
//! **[`tabs`]**, **[`tea`]**, **[`marker`]**, **[`audio`]**: The decorative
//! widgets: tab selection, the tea color cycle, map marker routing, and
//! background music controls.
//!
//! **[`config`]**: [`SiteConfig`](config::SiteConfig) thresholds, delays
//! and DOM selectors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod anchor;
pub mod audio;
pub mod chrome;
pub mod config;
pub mod form;
pub mod marker;
pub mod reveal;
pub mod tabs;
pub mod tea;
pub mod trace;
