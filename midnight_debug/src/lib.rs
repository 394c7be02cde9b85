// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON recording of countdown traces.
//!
//! This crate provides [`TraceSink`](midnight_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory event log with JSON export.

pub mod pretty;
pub mod recorder;
