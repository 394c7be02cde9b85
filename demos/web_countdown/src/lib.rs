// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaderboard page glue, driven by `midnight_backend_web`.
//!
//! On load this fades out the loading overlay, installs the data table
//! keyboard shortcuts, and starts the countdown to local midnight if the page
//! has the countdown label and progress bar. Pages without them (the genre
//! listings) just skip the countdown.
//!
//! Build with: `wasm-pack build --target web demos/web_countdown`

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::ToString as _;

use wasm_bindgen::prelude::*;
use web_sys::console;

use midnight_backend_web::{CountdownLoop, KeyBindings, fade_out_loading};
use midnight_core::config::PageConfig;
use midnight_core::error::MountError;
use midnight_core::trace::{MountFailedEvent, StartEvent, StopEvent, StopReason, TraceSink};

/// Lifecycle events to the browser console.
#[derive(Debug, Default)]
struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_start(&mut self, e: &StartEvent) {
        let msg = format!(
            "countdown armed: {}s to midnight ({:?})",
            (e.target - e.now).millis() / 1_000,
            e.offset,
        );
        console::debug_1(&msg.into());
    }

    fn on_stop(&mut self, e: &StopEvent) {
        let msg = match e.reason {
            StopReason::Reached => {
                format!("countdown reached midnight after {} frames", e.tick_index)
            }
            StopReason::Cancelled => format!("countdown cancelled after {} frames", e.tick_index),
        };
        console::debug_1(&msg.into());
    }

    fn on_mount_failed(&mut self, e: &MountFailedEvent) {
        console::debug_1(&format!("no #{} on this page, countdown skipped", e.id).into());
    }
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str(&MountError::NoDocument.to_string()))?;
    let config = PageConfig::DEFAULT;

    fade_out_loading(&document, &config);

    let keys = KeyBindings::install(&document, config)?;
    // Listen for the lifetime of the page.
    core::mem::forget(keys);

    match CountdownLoop::mount(&document, &config, Some(Box::new(ConsoleSink))) {
        Ok(countdown) => {
            countdown.start();
            // Keep the frame loop alive; there is no teardown on the web.
            core::mem::forget(countdown);
        }
        // Already reported through the trace sink.
        Err(MountError::MissingSurface { .. }) => {}
        Err(err) => return Err(JsValue::from_str(&err.to_string())),
    }

    Ok(())
}
