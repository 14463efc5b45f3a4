// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background music controls.
//!
//! The `<audio>` element owns playback. The button glyph shows the requested
//! state and falls back to "paused" if the browser rejects a play request
//! (autoplay policy), after telling the visitor to interact first.

use teahouse_backend_web::dom::{Scope as _, listen, window};
use teahouse_backend_web::{DomError, alert, describe};
use teahouse_core::audio::{PLAY_BLOCKED_ALERT, Playback, clamp_volume};
use teahouse_core::config::SiteConfig;
use teahouse_core::trace::{Feature, PlaybackEvent, PlaybackFailedEvent, VolumeEvent};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlAudioElement, HtmlElement, HtmlInputElement};

use crate::diag;

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selectors = &config.selectors;
    let Some(audio) = document.query_as::<HtmlAudioElement>(selectors.bgm_audio)? else {
        diag::inert(Feature::Audio, selectors.bgm_audio);
        return Ok(());
    };

    if let Some(button) = document.query_as::<HtmlElement>(selectors.bgm_play)? {
        let a = audio.clone();
        let b = button.clone();
        listen(&button, "click", move |_event| {
            diag::check(Feature::Audio, toggle(&a, &b));
        })?;
    }

    if let Some(slider) = document.query_as::<HtmlInputElement>(selectors.bgm_volume)? {
        let a = audio.clone();
        let s = slider.clone();
        listen(&slider, "input", move |_event| set_volume(&a, &s))?;
    }

    listen(&*window()?, "beforeunload", move |_event| {
        diag::check(Feature::Audio, audio.pause().map_err(DomError::from));
    })
}

fn toggle(audio: &HtmlAudioElement, button: &HtmlElement) -> Result<(), DomError> {
    let requested = Playback::from_paused(audio.paused()).toggled();
    diag::trace(|t| t.playback(&PlaybackEvent { playback: requested }));
    button.set_text_content(Some(requested.glyph()));

    match requested {
        Playback::Paused => audio.pause()?,
        Playback::Playing => {
            let promise = audio.play()?;
            let button = button.clone();
            spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    let reason = describe(&err);
                    diag::trace(|t| t.playback_failed(&PlaybackFailedEvent { reason: &reason }));
                    button.set_text_content(Some(Playback::Paused.glyph()));
                    if let Ok(window) = window() {
                        alert(&window, PLAY_BLOCKED_ALERT);
                    }
                }
            });
        }
    }
    Ok(())
}

fn set_volume(audio: &HtmlAudioElement, slider: &HtmlInputElement) {
    let Ok(requested) = slider.value().trim().parse::<f64>() else {
        return;
    };
    let Some(volume) = clamp_volume(requested) else {
        return;
    };
    audio.set_volume(volume);
    // Snap the slider back into range.
    slider.set_value(&volume.to_string());
    diag::trace(|t| {
        t.volume(&VolumeEvent {
            requested,
            applied: volume,
        });
    });
}
