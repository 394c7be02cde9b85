// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording with JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event as a
//! [`RecordedEvent`]. [`RecorderSink::to_json`] renders the log as a JSON
//! array of objects tagged by `"event"`, ready to paste into a bug report.

use midnight_core::format::Hms;
use midnight_core::progress::Progress;
use midnight_core::time::{Duration, WallTime};
use midnight_core::trace::{
    MountFailedEvent, RenderEvent, StartEvent, StopEvent, StopReason, TickEvent, TraceSink,
};
use serde_json::{Value, json};

/// A single recorded trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`StartEvent`].
    Start {
        /// Construction time.
        now: WallTime,
        /// Target instant.
        target: WallTime,
        /// Offset east of UTC, in minutes.
        offset_minutes: i32,
    },
    /// See [`TickEvent`].
    Tick {
        /// Tick counter.
        tick_index: u64,
        /// Clock reading.
        now: WallTime,
        /// Signed remaining time.
        remaining: Duration,
    },
    /// See [`RenderEvent`].
    Render {
        /// Tick counter.
        tick_index: u64,
        /// Label fields.
        hms: Hms,
        /// Bar width.
        progress: Progress,
    },
    /// See [`StopEvent`].
    Stop {
        /// Ticks run before stopping.
        tick_index: u64,
        /// Clock reading at the stop.
        at: WallTime,
        /// Why it stopped.
        reason: StopReason,
    },
    /// See [`MountFailedEvent`].
    MountFailed {
        /// Missing element id.
        id: &'static str,
    },
}

impl RecordedEvent {
    /// Returns the event as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Start {
                now,
                target,
                offset_minutes,
            } => json!({
                "event": "start",
                "now": now.millis(),
                "target": target.millis(),
                "offset_minutes": offset_minutes,
            }),
            Self::Tick {
                tick_index,
                now,
                remaining,
            } => json!({
                "event": "tick",
                "tick": tick_index,
                "now": now.millis(),
                "remaining": remaining.millis(),
            }),
            Self::Render {
                tick_index,
                hms,
                progress,
            } => json!({
                "event": "render",
                "tick": tick_index,
                "text": hms.to_string(),
                "percent": progress.percent(),
            }),
            Self::Stop {
                tick_index,
                at,
                reason,
            } => json!({
                "event": "stop",
                "tick": tick_index,
                "at": at.millis(),
                "reason": match reason {
                    StopReason::Reached => "reached",
                    StopReason::Cancelled => "cancelled",
                },
            }),
            Self::MountFailed { id } => json!({
                "event": "mount_failed",
                "id": id,
            }),
        }
    }
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
    frame_events: bool,
}

impl RecorderSink {
    /// Creates a recorder that keeps only lifecycle events (start, stop,
    /// mount failures).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that also keeps per-frame tick and render events.
    #[must_use]
    pub fn with_frames() -> Self {
        Self {
            events: Vec::new(),
            frame_events: true,
        }
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Renders every event as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(self.events.iter().map(RecordedEvent::to_json).collect())
    }

    /// Renders every event as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_json())
    }
}

impl TraceSink for RecorderSink {
    fn on_start(&mut self, e: &StartEvent) {
        self.events.push(RecordedEvent::Start {
            now: e.now,
            target: e.target,
            offset_minutes: e.offset.minutes(),
        });
    }

    fn on_tick(&mut self, e: &TickEvent) {
        if self.frame_events {
            self.events.push(RecordedEvent::Tick {
                tick_index: e.tick_index,
                now: e.now,
                remaining: e.remaining,
            });
        }
    }

    fn on_render(&mut self, e: &RenderEvent) {
        if self.frame_events {
            self.events.push(RecordedEvent::Render {
                tick_index: e.tick_index,
                hms: e.hms,
                progress: e.progress,
            });
        }
    }

    fn on_stop(&mut self, e: &StopEvent) {
        self.events.push(RecordedEvent::Stop {
            tick_index: e.tick_index,
            at: e.at,
            reason: e.reason,
        });
    }

    fn on_mount_failed(&mut self, e: &MountFailedEvent) {
        self.events.push(RecordedEvent::MountFailed { id: e.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_only_by_default() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&TickEvent {
            tick_index: 0,
            now: WallTime(0),
            remaining: Duration(1),
        });
        rec.on_stop(&StopEvent {
            tick_index: 1,
            at: WallTime(1),
            reason: StopReason::Reached,
        });
        assert_eq!(rec.events().len(), 1, "tick dropped, stop kept");
    }

    #[test]
    fn json_export() {
        let mut rec = RecorderSink::with_frames();
        rec.on_render(&RenderEvent {
            tick_index: 4,
            hms: Hms::from_remaining(Duration(59_999)),
            progress: Progress::from_remaining(Duration::DAY, Duration(43_200_000)),
        });
        rec.on_mount_failed(&MountFailedEvent { id: "countdown-timer" });

        let json = rec.to_json();
        assert_eq!(json[0]["event"], "render");
        assert_eq!(json[0]["text"], "00:00:59");
        assert_eq!(json[0]["percent"], 50.0);
        assert_eq!(json[1], json!({"event": "mount_failed", "id": "countdown-timer"}));
        assert!(rec.to_json_string().is_ok(), "pretty printing succeeds");
    }
}
