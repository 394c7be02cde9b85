// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The countdown logic never touches a page directly. A *backend* supplies
//! three capabilities:
//!
//! - **Clock**: [`Clock`] reads wall-clock time and the local UTC offset
//!   (e.g. `Date.now()` and `getTimezoneOffset()` in the browser).
//!
//! - **Display sink**: [`DisplaySink`] receives the formatted text and the bar
//!   width each tick (e.g. an element's `textContent` and `style.width`).
//!
//! - **Frame source**: [`FrameRequester`] asks for exactly one more tick at
//!   the next display refresh (e.g. `requestAnimationFrame`).
//!
//! Test doubles for all three live in `midnight_harness`.
//!
//! # Crate boundaries
//!
//! `midnight_core` owns the countdown model, the driver and this contract
//! module. Backend crates depend on `midnight_core` and provide platform glue.
//! Application code depends on both and wires them together.

use crate::progress::Progress;
use crate::time::{UtcOffset, WallTime};

/// Source of wall-clock time.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> WallTime;

    /// Returns the local zone's offset from UTC in effect at `at`.
    fn utc_offset(&self, at: WallTime) -> UtcOffset;
}

/// The two output surfaces written each tick.
///
/// Implementations only write; the countdown never reads back what it
/// displayed.
pub trait DisplaySink {
    /// Replaces the countdown label text.
    fn set_text(&mut self, text: &str);

    /// Sets the progress bar width.
    fn set_width_percent(&mut self, progress: Progress);
}

/// Requests one more tick at the next display refresh.
///
/// Called at most once per tick, and only after the tick's writes are done,
/// so ticks never overlap.
pub trait FrameRequester {
    /// Schedules the next tick.
    fn request_frame(&mut self);
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> WallTime {
        (**self).now()
    }

    fn utc_offset(&self, at: WallTime) -> UtcOffset {
        (**self).utc_offset(at)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_width_percent(&mut self, progress: Progress) {
        (**self).set_width_percent(progress);
    }
}
