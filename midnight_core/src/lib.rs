// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for a display-synchronized countdown to local midnight.
//!
//! `midnight_core` holds everything about the countdown that does not touch a
//! browser: time arithmetic, target derivation, formatting, the running/stopped
//! state machine, and the ports a platform backend plugs into. It is `no_std`
//! compatible (with `alloc`).
//!
//! # Architecture
//!
//! One tick flows through the crate like this:
//!
//! ```text
//!   Backend (frame source)
//!       │
//!       ▼
//!   Synchronizer::tick() ──► Clock::now() ──► Countdown::tick()
//!                                                  │
//!                 ┌────────────────────────────────┘
//!                 ▼
//!   DisplaySink::set_text() / set_width_percent()
//!                 │
//!                 ▼
//!   FrameRequester::request_frame()   (only while running)
//! ```
//!
//! **[`time`]**: Wall-clock instants, signed millisecond durations and UTC
//! offsets.
//!
//! **[`target`]**: Next-local-midnight derivation.
//!
//! **[`format`]**: Floor decomposition into `HH:MM:SS`.
//!
//! **[`progress`]**: Clamped elapsed-fraction percentages.
//!
//! **[`countdown`]**: The [`Countdown`](countdown::Countdown) state machine.
//!
//! **[`sync`]**: The [`Synchronizer`](sync::Synchronizer) driver that ties a
//! countdown to its clock, sink and frame source.
//!
//! **[`backend`]**: Port traits a platform backend implements.
//!
//! **[`keys`]**: Data table keyboard shortcut resolution.
//!
//! **[`fade`]**: Loading overlay fade-out parameters.
//!
//! **[`config`]**: Element ids and selectors of the host page.
//!
//! **[`error`]**: Mount-time errors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! countdown instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod countdown;
pub mod error;
pub mod fade;
pub mod format;
pub mod keys;
pub mod progress;
pub mod sync;
pub mod target;
pub mod time;
pub mod trace;
