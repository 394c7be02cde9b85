// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the countdown loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Synchronizer`](crate::sync::Synchronizer) calls at each stage. All method
//! bodies default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::format::Hms;
use crate::progress::Progress;
use crate::time::{Duration, UtcOffset, WallTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a countdown stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// Remaining time reached zero or went negative.
    Reached,
    /// The embedder cancelled the loop.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when a countdown is armed.
#[derive(Clone, Copy, Debug)]
pub struct StartEvent {
    /// Time the countdown was constructed.
    pub now: WallTime,
    /// The fixed target instant.
    pub target: WallTime,
    /// Local offset used to derive the target.
    pub offset: UtcOffset,
}

/// Emitted at the start of every tick.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Monotonic tick counter, starting at zero.
    pub tick_index: u64,
    /// Clock reading for this tick.
    pub now: WallTime,
    /// Signed remaining time for this tick.
    pub remaining: Duration,
}

/// Emitted after the display sink has been written.
#[derive(Clone, Copy, Debug)]
pub struct RenderEvent {
    /// Tick counter.
    pub tick_index: u64,
    /// Fields written to the text surface.
    pub hms: Hms,
    /// Width written to the bar surface.
    pub progress: Progress,
}

/// Emitted once when the countdown enters its terminal state.
#[derive(Clone, Copy, Debug)]
pub struct StopEvent {
    /// Ticks run before stopping.
    pub tick_index: u64,
    /// Clock reading at the stop.
    pub at: WallTime,
    /// Why the loop stopped.
    pub reason: StopReason,
}

/// Emitted when a display surface could not be found at mount time.
#[derive(Clone, Copy, Debug)]
pub struct MountFailedEvent {
    /// Element id that was looked up.
    pub id: &'static str,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the countdown loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a countdown is armed.
    fn on_start(&mut self, e: &StartEvent) {
        _ = e;
    }

    /// Called at the start of each tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called after the display sink has been written.
    fn on_render(&mut self, e: &RenderEvent) {
        _ = e;
    }

    /// Called when the countdown stops.
    fn on_stop(&mut self, e: &StopEvent) {
        _ = e;
    }

    /// Called when mounting fails on a missing surface.
    fn on_mount_failed(&mut self, e: &MountFailedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`StartEvent`].
    #[inline]
    pub fn start(&mut self, e: &StartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderEvent`].
    #[inline]
    pub fn render(&mut self, e: &RenderEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StopEvent`].
    #[inline]
    pub fn stop(&mut self, e: &StopEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stop(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MountFailedEvent`].
    #[inline]
    pub fn mount_failed(&mut self, e: &MountFailedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount_failed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        ticks: u32,
        stops: u32,
    }

    impl TraceSink for Counting {
        fn on_tick(&mut self, _e: &TickEvent) {
            self.ticks += 1;
        }

        fn on_stop(&mut self, _e: &StopEvent) {
            self.stops += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            let e = TickEvent {
                tick_index: 0,
                now: WallTime(0),
                remaining: Duration(10),
            };
            tracer.tick(&e);
            tracer.tick(&e);
            tracer.stop(&StopEvent {
                tick_index: 2,
                at: WallTime(10),
                reason: StopReason::Reached,
            });
        }
        assert_eq!(sink.ticks, 2, "two tick events");
        assert_eq!(sink.stops, 1, "one stop event");
    }

    #[test]
    fn none_tracer_is_silent() {
        let mut tracer = Tracer::none();
        tracer.mount_failed(&MountFailedEvent { id: "countdown-timer" });
    }
}
