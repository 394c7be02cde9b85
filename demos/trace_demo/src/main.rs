// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated countdown run that exercises the tracing pipeline.
//!
//! Counts down the last two seconds before a Tokyo midnight on a 60 Hz
//! simulated display, printing events through a
//! [`PrettyPrintSink`](midnight_debug::pretty::PrettyPrintSink) and recording
//! them in a [`RecorderSink`](midnight_debug::recorder::RecorderSink), then
//! writes the recording to `trace.json`.

use std::fs::File;
use std::io::{BufWriter, Write as _};

use midnight_core::sync::Synchronizer;
use midnight_core::time::{Duration, UtcOffset, WallTime};
use midnight_core::trace::{
    MountFailedEvent, RenderEvent, StartEvent, StopEvent, TickEvent, TraceSink, Tracer,
};
use midnight_debug::pretty::PrettyPrintSink;
use midnight_debug::recorder::RecorderSink;
use midnight_harness::{ManualClock, REFRESH_60HZ, RecordingSink, drive};

/// 2026-10-18T15:00:00Z, midnight in Tokyo.
const TOKYO_MIDNIGHT: WallTime = WallTime(1_792_335_600_000);
const TOKYO: UtcOffset = UtcOffset(540);
const MAX_TICKS: u64 = 1_000;

/// Forwards every event to two sinks.
struct Tee<'a, A, B>(&'a mut A, &'a mut B);

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<'_, A, B> {
    fn on_start(&mut self, e: &StartEvent) {
        self.0.on_start(e);
        self.1.on_start(e);
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.0.on_tick(e);
        self.1.on_tick(e);
    }

    fn on_render(&mut self, e: &RenderEvent) {
        self.0.on_render(e);
        self.1.on_render(e);
    }

    fn on_stop(&mut self, e: &StopEvent) {
        self.0.on_stop(e);
        self.1.on_stop(e);
    }

    fn on_mount_failed(&mut self, e: &MountFailedEvent) {
        self.0.on_mount_failed(e);
        self.1.on_mount_failed(e);
    }
}

fn main() -> std::io::Result<()> {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::stderr();
    let mut recorder = RecorderSink::new();

    // -- simulated run -----------------------------------------------------
    let clock = ManualClock::new(TOKYO_MIDNIGHT - Duration::from_secs(2), TOKYO);
    let report = {
        let mut tee = Tee(&mut pretty, &mut recorder);
        let mut tracer = Tracer::new(&mut tee);
        let mut sync = Synchronizer::new(&clock, RecordingSink::default(), &mut tracer);
        drive(&mut sync, &clock, REFRESH_60HZ, MAX_TICKS, &mut tracer)
    };

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(recorder.to_json_string()?.as_bytes())?;
    writer.flush()?;

    println!(
        "Wrote {path} ({} events, {} ticks, stopped: {})",
        recorder.events().len(),
        report.ticks,
        report.stopped,
    );
    Ok(())
}
