// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic stand-ins for the countdown's platform ports.
//!
//! - [`ManualClock`]: a [`Clock`] that only moves when told to.
//! - [`RecordingSink`]: a [`DisplaySink`] that keeps every write.
//! - [`ManualFrames`]: a [`FrameRequester`] that counts pending frames
//!   instead of waiting for a display.
//! - [`drive`]: runs a [`Synchronizer`] frame by frame on a simulated
//!   refresh cadence until it stops.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::Cell;

use midnight_core::backend::{Clock, DisplaySink, FrameRequester};
use midnight_core::countdown::TickOutcome;
use midnight_core::progress::Progress;
use midnight_core::sync::Synchronizer;
use midnight_core::time::{Duration, UtcOffset, WallTime};
use midnight_core::trace::Tracer;

/// Roughly one 60 Hz display refresh.
pub const REFRESH_60HZ: Duration = Duration(16);

/// A clock that stays put until advanced.
///
/// Interior mutability lets a test hold `&ManualClock` while a
/// [`Synchronizer`] owns another reference to it.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<WallTime>,
    offset: UtcOffset,
    /// A later offset and the instant it takes effect.
    change: Option<(WallTime, UtcOffset)>,
}

impl ManualClock {
    /// Creates a clock reading `now` in a zone `offset` from UTC.
    #[must_use]
    pub const fn new(now: WallTime, offset: UtcOffset) -> Self {
        Self {
            now: Cell::new(now),
            offset,
            change: None,
        }
    }

    /// Switches the zone to `offset` from instant `at` on, the way a DST
    /// transition does.
    #[must_use]
    pub const fn with_offset_change(mut self, at: WallTime, offset: UtcOffset) -> Self {
        self.change = Some((at, offset));
        self
    }

    /// Moves the clock forward (or backward, for a negative span).
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jumps to an absolute time.
    pub fn set(&self, to: WallTime) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> WallTime {
        self.now.get()
    }

    fn utc_offset(&self, at: WallTime) -> UtcOffset {
        match self.change {
            Some((from, offset)) if at >= from => offset,
            _ => self.offset,
        }
    }
}

/// A display sink that records every write in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Every label written.
    pub texts: Vec<String>,
    /// Every bar width written.
    pub widths: Vec<Progress>,
}

impl RecordingSink {
    /// Returns the most recent label.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }

    /// Returns the most recent bar width.
    #[must_use]
    pub fn last_width(&self) -> Option<Progress> {
        self.widths.last().copied()
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn set_width_percent(&mut self, progress: Progress) {
        self.widths.push(progress);
    }
}

/// A frame source with no display behind it.
///
/// Each [`request_frame`](FrameRequester::request_frame) adds one pending
/// frame; [`take`](Self::take) consumes one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualFrames {
    pending: u32,
    requested_total: u64,
}

impl ManualFrames {
    /// Returns the number of frames requested but not yet delivered.
    #[must_use]
    pub const fn pending(&self) -> u32 {
        self.pending
    }

    /// Returns how many frames were ever requested.
    #[must_use]
    pub const fn requested_total(&self) -> u64 {
        self.requested_total
    }

    /// Consumes one pending frame, returning `false` if there was none.
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameRequester for ManualFrames {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.requested_total += 1;
    }
}

/// Summary of a [`drive`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriveReport {
    /// Ticks executed, including the first synchronous one.
    pub ticks: u64,
    /// Whether the countdown stopped on its own within the budget.
    pub stopped: bool,
    /// The most pending frames observed at once. Never above one when
    /// ticks re-arm at most once.
    pub max_pending: u32,
}

/// Runs `sync` the way a browser would: one tick immediately, then one tick
/// per delivered frame, advancing `clock` by `refresh` between frames.
///
/// Stops when the countdown stops or after `max_ticks` ticks.
pub fn drive<S: DisplaySink>(
    sync: &mut Synchronizer<&ManualClock, S>,
    clock: &ManualClock,
    refresh: Duration,
    max_ticks: u64,
    tracer: &mut Tracer<'_>,
) -> DriveReport {
    let mut frames = ManualFrames::default();
    let mut report = DriveReport {
        ticks: 0,
        stopped: false,
        max_pending: 0,
    };

    let mut outcome = sync.tick(&mut frames, tracer);
    report.ticks += 1;
    report.max_pending = report.max_pending.max(frames.pending());

    while outcome == TickOutcome::Continue && report.ticks < max_ticks {
        if !frames.take() {
            break;
        }
        clock.advance(refresh);
        outcome = sync.tick(&mut frames, tracer);
        report.ticks += 1;
        report.max_pending = report.max_pending.max(frames.pending());
    }

    report.stopped = outcome == TickOutcome::Stopped;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(WallTime(1_000), UtcOffset(60));
        assert_eq!(clock.now(), WallTime(1_000));
        clock.advance(Duration(500));
        assert_eq!(clock.now(), WallTime(1_500));
        clock.advance(Duration(-2_000));
        assert_eq!(clock.now(), WallTime(-500), "negative advance rewinds");
        assert_eq!(clock.utc_offset(WallTime(0)), UtcOffset(60));
    }

    #[test]
    fn manual_clock_offset_change() {
        let clock = ManualClock::new(WallTime(0), UtcOffset(-180))
            .with_offset_change(WallTime(1_000), UtcOffset(-240));
        assert_eq!(clock.utc_offset(WallTime(999)), UtcOffset(-180));
        assert_eq!(clock.utc_offset(WallTime(1_000)), UtcOffset(-240), "change is inclusive");
    }

    #[test]
    fn manual_frames_count() {
        let mut frames = ManualFrames::default();
        assert!(!frames.take(), "nothing pending yet");
        frames.request_frame();
        frames.request_frame();
        assert_eq!(frames.pending(), 2);
        assert!(frames.take(), "one consumed");
        assert_eq!(frames.pending(), 1);
        assert_eq!(frames.requested_total(), 2);
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        sink.set_text("00:00:02");
        sink.set_text("00:00:01");
        sink.set_width_percent(Progress::FULL);
        assert_eq!(sink.last_text(), Some("00:00:01"));
        assert_eq!(sink.last_width(), Some(Progress::FULL));
        assert_eq!(sink.texts.len(), 2);
    }
}
