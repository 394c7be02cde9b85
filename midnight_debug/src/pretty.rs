// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).
//!
//! Tick and render events arrive once per display refresh; set
//! [`with_every_frame`](PrettyPrintSink::with_every_frame) to see them, they
//! are skipped otherwise.

use std::io::Write;

use midnight_core::trace::{
    MountFailedEvent, RenderEvent, StartEvent, StopEvent, StopReason, TickEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    every_frame: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("every_frame", &self.every_frame)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            every_frame: false,
        }
    }

    /// Also prints per-frame tick and render events.
    #[must_use]
    pub fn with_every_frame(mut self, every_frame: bool) -> Self {
        self.every_frame = every_frame;
        self
    }

    /// Consumes the sink, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn reason_name(reason: StopReason) -> &'static str {
    match reason {
        StopReason::Reached => "reached",
        StopReason::Cancelled => "cancelled",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_start(&mut self, e: &StartEvent) {
        let _ = writeln!(
            self.writer,
            "[start] now={}ms target={}ms in={}ms offset={:?}",
            e.now.millis(),
            e.target.millis(),
            (e.target - e.now).millis(),
            e.offset,
        );
    }

    fn on_tick(&mut self, e: &TickEvent) {
        if !self.every_frame {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[tick] #{} now={}ms remaining={}ms",
            e.tick_index,
            e.now.millis(),
            e.remaining.millis(),
        );
    }

    fn on_render(&mut self, e: &RenderEvent) {
        if !self.every_frame {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[render] #{} text={} width={}",
            e.tick_index, e.hms, e.progress,
        );
    }

    fn on_stop(&mut self, e: &StopEvent) {
        let _ = writeln!(
            self.writer,
            "[stop] {} after {} ticks at {}ms",
            reason_name(e.reason),
            e.tick_index,
            e.at.millis(),
        );
    }

    fn on_mount_failed(&mut self, e: &MountFailedEvent) {
        let _ = writeln!(self.writer, "[mount:failed] missing #{}", e.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midnight_core::format::Hms;
    use midnight_core::progress::Progress;
    use midnight_core::time::{Duration, UtcOffset, WallTime};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn start_and_stop_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_start(&StartEvent {
            now: WallTime(1_000),
            target: WallTime(61_000),
            offset: UtcOffset(540),
        });
        sink.on_stop(&StopEvent {
            tick_index: 3_600,
            at: WallTime(61_010),
            reason: StopReason::Reached,
        });

        assert_eq!(
            output(sink),
            "[start] now=1000ms target=61000ms in=60000ms offset=UtcOffset(+09:00)\n\
             [stop] reached after 3600 ticks at 61010ms\n"
        );
    }

    #[test]
    fn frame_events_are_opt_in() {
        let tick = TickEvent {
            tick_index: 7,
            now: WallTime(0),
            remaining: Duration(3_661_000),
        };
        let render = RenderEvent {
            tick_index: 7,
            hms: Hms::from_remaining(Duration(3_661_000)),
            progress: Progress::EMPTY,
        };

        let mut quiet = PrettyPrintSink::with_writer(Vec::new());
        quiet.on_tick(&tick);
        quiet.on_render(&render);
        assert!(output(quiet).is_empty(), "per-frame events skipped by default");

        let mut loud = PrettyPrintSink::with_writer(Vec::new()).with_every_frame(true);
        loud.on_tick(&tick);
        loud.on_render(&render);
        assert_eq!(
            output(loud),
            "[tick] #7 now=0ms remaining=3661000ms\n[render] #7 text=01:01:01 width=0%\n"
        );
    }

    #[test]
    fn mount_failure_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_mount_failed(&MountFailedEvent { id: "progress-bar" });
        assert_eq!(output(sink), "[mount:failed] missing #progress-bar\n");
    }
}
