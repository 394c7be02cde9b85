// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The countdown driver.
//!
//! [`Synchronizer`] binds a [`Countdown`] to the [`Clock`] it reads and the
//! [`DisplaySink`] it writes. The frame source is passed into each
//! [`tick`](Synchronizer::tick) rather than owned, because in the browser the
//! thing that requests the next frame is the very callback running the tick.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! let mut sync = Synchronizer::new(clock, sink, &mut tracer);
//! fn on_frame() {
//!     // Re-arms `frames` only while time remains.
//!     sync.tick(&mut frames, &mut tracer);
//! }
//! ```

use crate::backend::{Clock, DisplaySink, FrameRequester};
use crate::countdown::{Countdown, CountdownState, TickOutcome};
use crate::error::MountError;
use crate::target::next_midnight_in_zone;
use crate::time::Duration;
use crate::trace::{MountFailedEvent, StartEvent, Tracer};

/// Drives a [`Countdown`] from a clock into a display sink.
#[derive(Debug)]
pub struct Synchronizer<C, S> {
    clock: C,
    sink: S,
    countdown: Countdown,
}

impl<C: Clock, S: DisplaySink> Synchronizer<C, S> {
    /// Arms a countdown to the next local midnight as seen by `clock` right
    /// now, using the offset `clock` reports for that midnight.
    #[must_use]
    pub fn new(clock: C, sink: S, tracer: &mut Tracer<'_>) -> Self {
        let now = clock.now();
        let (target, offset) = next_midnight_in_zone(now, |at| clock.utc_offset(at));
        let countdown = Countdown::with_target(target, Duration::DAY);
        tracer.start(&StartEvent {
            now,
            target: countdown.target(),
            offset,
        });
        Self {
            clock,
            sink,
            countdown,
        }
    }

    /// Arms a countdown over a sink that may have failed to mount.
    ///
    /// On failure nothing is armed and no [`StartEvent`] is emitted; a missing
    /// surface is reported to `tracer` instead.
    ///
    /// # Errors
    ///
    /// Returns `sink`'s error unchanged.
    pub fn mount(
        clock: C,
        sink: Result<S, MountError>,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, MountError> {
        let sink = sink.inspect_err(|err| {
            if let MountError::MissingSurface { id } = *err {
                tracer.mount_failed(&MountFailedEvent { id });
            }
        })?;
        Ok(Self::new(clock, sink, tracer))
    }

    /// Wraps an already-built countdown.
    #[must_use]
    pub fn with_countdown(clock: C, sink: S, countdown: Countdown) -> Self {
        Self {
            clock,
            sink,
            countdown,
        }
    }

    /// Runs one tick and, while time remains, requests the next one.
    pub fn tick(
        &mut self,
        frames: &mut impl FrameRequester,
        tracer: &mut Tracer<'_>,
    ) -> TickOutcome {
        let now = self.clock.now();
        let outcome = self.countdown.tick(now, &mut self.sink, tracer);
        if outcome == TickOutcome::Continue {
            frames.request_frame();
        }
        outcome
    }

    /// Stops the loop early. The pending frame, if any, will find the
    /// countdown stopped and schedule nothing.
    pub fn cancel(&mut self, tracer: &mut Tracer<'_>) -> bool {
        let now = self.clock.now();
        self.countdown.cancel(now, tracer)
    }

    /// Returns the countdown being driven.
    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.countdown.state()
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the display sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the driver, returning its clock and sink.
    #[must_use]
    pub fn into_parts(self) -> (C, S) {
        (self.clock, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Progress;
    use crate::time::{Duration, UtcOffset, WallTime};
    use core::cell::Cell;

    struct Fixed(Cell<WallTime>);

    impl Clock for Fixed {
        fn now(&self) -> WallTime {
            self.0.get()
        }

        fn utc_offset(&self, _at: WallTime) -> UtcOffset {
            UtcOffset::UTC
        }
    }

    #[derive(Default)]
    struct Counter(u32);

    impl FrameRequester for Counter {
        fn request_frame(&mut self) {
            self.0 += 1;
        }
    }

    #[derive(Default)]
    struct Last {
        writes: u32,
        width: Progress,
    }

    impl DisplaySink for Last {
        fn set_text(&mut self, _text: &str) {
            self.writes += 1;
        }

        fn set_width_percent(&mut self, progress: Progress) {
            self.width = progress;
        }
    }

    /// 2026-10-18T18:00:00Z
    const EVENING: WallTime = WallTime(1_792_346_400_000);

    #[test]
    fn requests_a_frame_while_running() {
        let clock = Fixed(Cell::new(EVENING));
        let mut sync = Synchronizer::new(&clock, Last::default(), &mut Tracer::none());
        let mut frames = Counter::default();

        assert_eq!(sync.tick(&mut frames, &mut Tracer::none()), TickOutcome::Continue);
        assert_eq!(frames.0, 1, "one request per running tick");
        assert_eq!(sync.sink().width.percent(), 75.0);
    }

    #[test]
    fn no_request_after_target() {
        let clock = Fixed(Cell::new(EVENING));
        let mut sync = Synchronizer::new(&clock, Last::default(), &mut Tracer::none());
        let mut frames = Counter::default();

        clock.0.set(EVENING + Duration::from_hours(6));
        assert_eq!(sync.tick(&mut frames, &mut Tracer::none()), TickOutcome::Stopped);
        assert_eq!(frames.0, 0, "terminal tick schedules nothing");
        assert_eq!(sync.sink().width, Progress::FULL);
    }

    #[test]
    fn mount_failure_arms_nothing() {
        let clock = Fixed(Cell::new(EVENING));
        let missing = Err(MountError::MissingSurface { id: "progress-bar" });
        let sync = Synchronizer::<_, Last>::mount(&clock, missing, &mut Tracer::none());
        assert!(
            matches!(sync, Err(MountError::MissingSurface { id: "progress-bar" })),
            "the lookup error is passed through"
        );
    }

    #[test]
    fn mount_success_arms_a_countdown() {
        let clock = Fixed(Cell::new(EVENING));
        let sync = Synchronizer::mount(&clock, Ok(Last::default()), &mut Tracer::none());
        assert!(
            sync.is_ok_and(|s| s.state() == CountdownState::Running),
            "a mounted sink starts running"
        );
    }

    #[test]
    fn cancel_prevents_further_requests() {
        let clock = Fixed(Cell::new(EVENING));
        let mut sync = Synchronizer::new(&clock, Last::default(), &mut Tracer::none());
        let mut frames = Counter::default();

        let _ = sync.tick(&mut frames, &mut Tracer::none());
        assert!(sync.cancel(&mut Tracer::none()), "cancel while running");
        let _ = sync.tick(&mut frames, &mut Tracer::none());

        assert_eq!(frames.0, 1, "only the pre-cancel tick re-armed");
        assert_eq!(sync.sink().writes, 1, "cancelled tick wrote nothing");
    }
}
