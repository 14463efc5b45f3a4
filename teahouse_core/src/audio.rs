// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background music controls.
//!
//! The native media element owns the real playback state; this module only
//! decides what a click asks for and which glyph to show.

/// Glyph shown while the music plays (the button offers "pause").
pub const PAUSE_GLYPH: &str = "⏸️";
/// Glyph shown while the music is paused (the button offers "play").
pub const PLAY_GLYPH: &str = "▶️";
/// Alert shown when the browser refuses to start playback.
pub const PLAY_BLOCKED_ALERT: &str = "音频播放需要用户交互，请先点击页面任意位置再尝试播放";
/// Diagnostic logged when the page has no audio element.
pub const MISSING_AUDIO_DIAGNOSTIC: &str = "未找到BGM音频元素（#bgm-audio），BGM控制功能失效";

/// Playback state as reported by the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Playback {
    /// Audio is playing (or a play request is in flight).
    Playing,
    /// Audio is paused.
    Paused,
}

impl Playback {
    /// Maps the element's `paused` flag.
    #[must_use]
    pub const fn from_paused(paused: bool) -> Self {
        if paused { Self::Paused } else { Self::Playing }
    }

    /// What a click on the play button should do from this state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    /// Button glyph for this state.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Playing => PAUSE_GLYPH,
            Self::Paused => PLAY_GLYPH,
        }
    }
}

/// Clamps a slider value into the media volume range `0.0..=1.0`.
///
/// Returns `None` for NaN, which the media element would reject.
#[must_use]
pub fn clamp_volume(raw: f64) -> Option<f64> {
    if raw.is_nan() {
        None
    } else {
        Some(raw.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_flips_playback() {
        assert_eq!(Playback::from_paused(true).toggled(), Playback::Playing);
        assert_eq!(Playback::from_paused(false).toggled(), Playback::Paused);
    }

    #[test]
    fn glyph_tracks_state() {
        assert_eq!(Playback::Playing.glyph(), "⏸️");
        assert_eq!(Playback::Paused.glyph(), "▶️");
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(clamp_volume(0.4), Some(0.4));
        assert_eq!(clamp_volume(-3.0), Some(0.0));
        assert_eq!(clamp_volume(7.5), Some(1.0));
        assert_eq!(clamp_volume(f64::INFINITY), Some(1.0));
        assert_eq!(clamp_volume(f64::NAN), None);
    }
}
