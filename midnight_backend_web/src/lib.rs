// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for midnight.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`WebClock`]: `Date`-backed [`Clock`]
//! - [`DomSink`]: label and bar elements as a [`DisplaySink`]
//! - [`CountdownLoop`]: all of the above wired together
//! - [`KeyBindings`]: data table keyboard shortcuts
//! - [`fade_out_loading`]: loading overlay removal

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod countdown;
mod keys;
mod loading;
mod raf;
mod sink;

pub use countdown::CountdownLoop;
pub use keys::KeyBindings;
pub use loading::fade_out_loading;
pub use midnight_core::backend::{Clock, DisplaySink, FrameRequester};
pub use raf::{NextFrame, RafLoop};
pub use sink::DomSink;

use midnight_core::time::{UtcOffset, WallTime};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = "now")]
    fn date_now() -> f64;
}

/// Returns the current wall-clock time from `Date.now()`.
#[must_use]
pub fn now() -> WallTime {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Date.now() is an integral millisecond count well inside i64"
    )]
    let ms = date_now() as i64;
    WallTime(ms)
}

/// Returns the browser's local UTC offset in effect at `at`.
#[must_use]
pub fn utc_offset(at: WallTime) -> UtcOffset {
    let date = js_sys::Date::new(&JsValue::from_f64(at.millis() as f64));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "getTimezoneOffset() is a small whole number of minutes"
    )]
    let minutes_behind = date.get_timezone_offset() as i32;
    UtcOffset::from_js_timezone_offset(minutes_behind)
}

/// The browser's wall clock and time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClock;

impl Clock for WebClock {
    fn now(&self) -> WallTime {
        now()
    }

    fn utc_offset(&self, at: WallTime) -> UtcOffset {
        utc_offset(at)
    }
}

