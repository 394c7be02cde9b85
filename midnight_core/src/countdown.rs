// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The countdown state machine.
//!
//! A [`Countdown`] owns a fixed target instant and a fixed normalization
//! window. Each [`tick`](Countdown::tick) derives the remaining time from a
//! fresh clock reading (nothing accumulates between ticks, so a clock that
//! jumps backwards self-corrects on the next tick), writes the display sink,
//! and reports whether another tick is wanted.
//!
//! The lifecycle has two states:
//!
//! ```text
//!   Running ──(remaining <= 0 or cancel)──► Stopped
//! ```
//!
//! `Stopped` is terminal. A stopped countdown ignores ticks and writes
//! nothing; restarting means building a new countdown.

use alloc::string::String;
use core::fmt::Write as _;

use crate::backend::DisplaySink;
use crate::format::Hms;
use crate::progress::Progress;
use crate::target::next_midnight;
use crate::time::{Duration, UtcOffset, WallTime};
use crate::trace::{RenderEvent, StopEvent, StopReason, TickEvent, Tracer};

/// Lifecycle state of a [`Countdown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountdownState {
    /// Ticks update the display and ask for more ticks.
    Running,
    /// Terminal. Carries the reason the countdown stopped.
    Stopped(StopReason),
}

/// What the caller should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Schedule another tick at the next display refresh.
    Continue,
    /// Do not schedule anything further.
    Stopped,
}

/// Everything displayed for one clock reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Signed time left until the target.
    pub remaining: Duration,
    /// Label fields.
    pub hms: Hms,
    /// Bar width.
    pub progress: Progress,
}

/// Countdown to a fixed target instant, normalized against a fixed window.
#[derive(Clone, Debug)]
pub struct Countdown {
    target: WallTime,
    total: Duration,
    state: CountdownState,
    tick_index: u64,
    /// Reused label buffer.
    text: String,
}

impl Countdown {
    /// Counts down from `now` to the next local midnight over a one-day
    /// window.
    #[must_use]
    pub fn until_midnight(now: WallTime, offset: UtcOffset) -> Self {
        Self::with_target(next_midnight(now, offset), Duration::DAY)
    }

    /// Counts down to an explicit `target`, normalizing progress against
    /// `total`.
    ///
    /// Targets further than `total` away keep the bar at zero until the
    /// remaining time falls inside the window; targets more than 99 hours away
    /// widen the hours field beyond two digits.
    #[must_use]
    pub fn with_target(target: WallTime, total: Duration) -> Self {
        Self {
            target,
            total,
            state: CountdownState::Running,
            tick_index: 0,
            text: String::with_capacity(8),
        }
    }

    /// Returns the target instant.
    #[must_use]
    pub const fn target(&self) -> WallTime {
        self.target
    }

    /// Returns the normalization window.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    /// Returns `true` while ticks still update the display.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running)
    }

    /// Returns how many ticks have updated the display.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.tick_index
    }

    /// Returns the signed time left at `now`.
    #[must_use]
    pub const fn remaining_at(&self, now: WallTime) -> Duration {
        self.target.signed_duration_since(now)
    }

    /// Computes what would be displayed at `now`, without side effects.
    #[must_use]
    pub fn frame_at(&self, now: WallTime) -> Frame {
        let remaining = self.remaining_at(now);
        Frame {
            remaining,
            hms: Hms::from_remaining(remaining),
            progress: Progress::from_remaining(self.total, remaining),
        }
    }

    /// Runs one tick at clock reading `now`.
    ///
    /// Writes the label and bar, then returns [`TickOutcome::Continue`] while
    /// time remains. The tick that sees zero or negative remaining time still
    /// writes (showing `00:00:00` and a full bar) and moves to the terminal
    /// state. Ticks after that write nothing.
    pub fn tick(
        &mut self,
        now: WallTime,
        sink: &mut impl DisplaySink,
        tracer: &mut Tracer<'_>,
    ) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Stopped;
        }

        let frame = self.frame_at(now);
        let tick_index = self.tick_index;
        tracer.tick(&TickEvent {
            tick_index,
            now,
            remaining: frame.remaining,
        });

        self.text.clear();
        let _ = write!(self.text, "{}", frame.hms);
        sink.set_text(&self.text);
        sink.set_width_percent(frame.progress);
        self.tick_index += 1;

        tracer.render(&RenderEvent {
            tick_index,
            hms: frame.hms,
            progress: frame.progress,
        });

        if frame.remaining.is_positive() {
            TickOutcome::Continue
        } else {
            self.state = CountdownState::Stopped(StopReason::Reached);
            tracer.stop(&StopEvent {
                tick_index: self.tick_index,
                at: now,
                reason: StopReason::Reached,
            });
            TickOutcome::Stopped
        }
    }

    /// Stops the countdown without touching the display.
    ///
    /// Returns `false` if it was already stopped.
    pub fn cancel(&mut self, now: WallTime, tracer: &mut Tracer<'_>) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = CountdownState::Stopped(StopReason::Cancelled);
        tracer.stop(&StopEvent {
            tick_index: self.tick_index,
            at: now,
            reason: StopReason::Cancelled,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorded {
        texts: Vec<String>,
        widths: Vec<Progress>,
    }

    impl DisplaySink for Recorded {
        fn set_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }

        fn set_width_percent(&mut self, progress: Progress) {
            self.widths.push(progress);
        }
    }

    const TARGET: WallTime = WallTime(1_792_368_000_000);

    fn countdown() -> Countdown {
        Countdown::with_target(TARGET, Duration::DAY)
    }

    #[test]
    fn until_midnight_uses_a_day_window() {
        let now = TARGET - Duration::from_hours(5);
        let c = Countdown::until_midnight(now, UtcOffset::UTC);
        assert_eq!(c.target(), TARGET);
        assert_eq!(c.total(), Duration::DAY);
        assert!(c.is_running(), "fresh countdown runs");
    }

    #[test]
    fn tick_before_target_continues() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        let now = TARGET - Duration(3_661_000);
        let outcome = c.tick(now, &mut sink, &mut Tracer::none());

        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(sink.texts, ["01:01:01"]);
        assert_eq!(sink.widths.len(), 1);
        assert_eq!(c.ticks(), 1);
    }

    #[test]
    fn tick_at_target_writes_final_frame_and_stops() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        let outcome = c.tick(TARGET, &mut sink, &mut Tracer::none());

        assert_eq!(outcome, TickOutcome::Stopped);
        assert_eq!(sink.texts, ["00:00:00"]);
        assert_eq!(sink.widths, [Progress::FULL]);
        assert_eq!(c.state(), CountdownState::Stopped(StopReason::Reached));
    }

    #[test]
    fn late_frame_past_target_clamps() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        let outcome = c.tick(TARGET + Duration(40), &mut sink, &mut Tracer::none());

        assert_eq!(outcome, TickOutcome::Stopped);
        assert_eq!(sink.texts, ["00:00:00"]);
        assert_eq!(sink.widths, [Progress::FULL]);
    }

    #[test]
    fn stopped_countdown_ignores_ticks() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        let _ = c.tick(TARGET, &mut sink, &mut Tracer::none());
        let outcome = c.tick(TARGET - Duration(5_000), &mut sink, &mut Tracer::none());

        assert_eq!(outcome, TickOutcome::Stopped, "no re-entry");
        assert_eq!(sink.texts.len(), 1, "nothing written after stop");
    }

    #[test]
    fn cancel_is_terminal_and_silent() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        assert!(c.cancel(TARGET - Duration(1), &mut Tracer::none()), "first cancel");
        assert!(!c.cancel(TARGET, &mut Tracer::none()), "second cancel is a no-op");
        assert_eq!(c.state(), CountdownState::Stopped(StopReason::Cancelled));

        let outcome = c.tick(TARGET - Duration(1), &mut sink, &mut Tracer::none());
        assert_eq!(outcome, TickOutcome::Stopped);
        assert!(sink.texts.is_empty(), "cancel never writes");
    }

    #[test]
    fn backwards_clock_self_corrects() {
        let mut c = countdown();
        let mut sink = Recorded::default();
        let _ = c.tick(TARGET - Duration(10_000), &mut sink, &mut Tracer::none());
        // Clock steps back one minute, then resumes.
        let _ = c.tick(TARGET - Duration(70_000), &mut sink, &mut Tracer::none());
        let _ = c.tick(TARGET - Duration(9_000), &mut sink, &mut Tracer::none());

        assert_eq!(sink.texts, ["00:00:10", "00:01:10", "00:00:09"]);
        assert!(c.is_running(), "no stop while time remains");
    }

    #[test]
    fn frame_at_halfway() {
        let frame = countdown().frame_at(TARGET - Duration(43_200_000));
        assert_eq!(frame.progress.percent(), 50.0);
        assert_eq!(frame.hms.to_string(), "12:00:00");
    }
}
