// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `setTimeout` callbacks.
//!
//! Timers are fire-and-forget: nothing on the site cancels a scheduled
//! callback, so no handle is returned. The closure frees itself after it runs.

use core::time::Duration;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use crate::dom::window;
use crate::error::DomError;

/// Converts a delay to the `i32` milliseconds `setTimeout` takes, saturating.
#[must_use]
pub fn delay_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Runs `f` once after `delay`.
pub fn set_timeout<F>(delay: Duration, f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_millis(delay),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_converts_to_millis() {
        assert_eq!(delay_millis(Duration::from_millis(2000)), 2000);
        assert_eq!(delay_millis(Duration::from_micros(300_900)), 300);
    }

    #[test]
    fn huge_delay_saturates() {
        assert_eq!(delay_millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
