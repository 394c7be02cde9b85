// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] runs a callback once per display refresh for as long as the
//! callback keeps asking for more. Each invocation gets a [`NextFrame`], the
//! [`FrameRequester`] for this platform: calling
//! [`request_frame`](FrameRequester::request_frame) on it re-arms one more
//! `requestAnimationFrame` after the callback returns. A callback that does
//! not request a frame ends the loop.
//!
//! Browsers throttle `requestAnimationFrame` in hidden tabs, so the loop
//! pauses there for free.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use midnight_core::backend::FrameRequester;

// Direct global bindings instead of `web_sys::Window` methods, so nothing is
// fetched (or unwrapped) on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Re-arm flag handed to each [`RafLoop`] callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NextFrame {
    requested: bool,
}

impl NextFrame {
    /// Returns `true` if the callback asked for another frame.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

impl FrameRequester for NextFrame {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// A self re-arming `requestAnimationFrame` loop.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start). The loop
/// keeps going while the callback requests frames, until
/// [`stop`](Self::stop) is called, or until the `RafLoop` is dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;
type FrameCallback = Box<dyn FnMut(f64, &mut NextFrame)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Kept in its own `RefCell` so it can be set once in `start()` and read
    /// from inside itself without conflicting with `callback`.
    closure: RefCell<Option<RafClosure>>,

    /// The user callback, given the frame timestamp in milliseconds.
    callback: RefCell<FrameCallback>,

    /// Number of callback invocations so far.
    frame_counter: Cell<u64>,

    /// Whether the loop is currently running.
    running: Cell<bool>,

    /// The ID returned by the most recent `requestAnimationFrame` call,
    /// used by [`cancel_animation_frame`] when stopping.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a new `RafLoop` that is **not yet running**.
    pub fn new(callback: impl FnMut(f64, &mut NextFrame) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the loop.
    ///
    /// The first invocation runs synchronously, before `start` returns, so the
    /// page never shows an unfilled frame. Later invocations follow display
    /// refreshes. If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                run_frame(&inner, timestamp_ms);
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        run_frame(&self.inner, performance_now());
    }

    /// Stops the loop and cancels the pending frame. Can be restarted with
    /// [`start`](Self::start).
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Returns how many times the callback has run.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.inner.frame_counter.get()
    }
}

fn run_frame(inner: &RafInner, timestamp_ms: f64) {
    if !inner.running.get() {
        return;
    }
    inner.frame_counter.set(inner.frame_counter.get() + 1);

    let mut next = NextFrame::default();
    // Scoped so the borrow doesn't overlap with the `closure` RefCell.
    inner.callback.borrow_mut()(timestamp_ms, &mut next);

    if !next.is_requested() {
        inner.running.set(false);
        return;
    }

    // The callback may have stopped the loop itself.
    if inner.running.get()
        && let Some(ref closure) = *inner.closure.borrow()
    {
        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        inner.raf_id.set(id);
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish_non_exhaustive()
    }
}
