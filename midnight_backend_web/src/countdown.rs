// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The countdown wired to `requestAnimationFrame` and the DOM.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use midnight_core::config::PageConfig;
use midnight_core::countdown::CountdownState;
use midnight_core::error::MountError;
use midnight_core::sync::Synchronizer;
use midnight_core::trace::{TraceSink, Tracer};
use web_sys::Document;

use crate::raf::RafLoop;
use crate::sink::DomSink;
use crate::WebClock;

type SharedTrace = Rc<RefCell<Option<Box<dyn TraceSink>>>>;
type SharedSync = Rc<RefCell<Synchronizer<WebClock, DomSink>>>;

/// A mounted countdown: the synchronizer plus the frame loop driving it.
pub struct CountdownLoop {
    sync: SharedSync,
    trace: SharedTrace,
    raf: RafLoop,
}

impl core::fmt::Debug for CountdownLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CountdownLoop")
            .field("state", &self.state())
            .field("raf", &self.raf)
            .finish_non_exhaustive()
    }
}

/// Runs `f` with a tracer over the shared sink, if there is one.
fn with_tracer<R>(trace: &SharedTrace, f: impl FnOnce(&mut Tracer<'_>) -> R) -> R {
    let mut slot = trace.borrow_mut();
    let mut tracer = match slot.as_deref_mut() {
        Some(sink) => Tracer::new(sink),
        None => Tracer::none(),
    };
    f(&mut tracer)
}

impl CountdownLoop {
    /// Resolves the display surfaces and arms a countdown to the next local
    /// midnight. The loop does not run until [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// [`MountError::MissingSurface`] if either surface is absent; the
    /// failure is also reported to `trace`.
    pub fn mount(
        document: &Document,
        config: &PageConfig,
        trace: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, MountError> {
        let trace: SharedTrace = Rc::new(RefCell::new(trace));

        let sink = DomSink::mount(document, config);
        let sync = with_tracer(&trace, |t| Synchronizer::mount(WebClock, sink, t))?;
        let sync: SharedSync = Rc::new(RefCell::new(sync));

        let raf = {
            let sync = Rc::clone(&sync);
            let trace = Rc::clone(&trace);
            RafLoop::new(move |_timestamp_ms, next| {
                with_tracer(&trace, |t| sync.borrow_mut().tick(next, t));
            })
        };

        Ok(Self { sync, trace, raf })
    }

    /// Runs the first tick now and keeps ticking once per display refresh
    /// until the target is reached.
    pub fn start(&self) {
        self.raf.start();
    }

    /// Stops the countdown for good. The display keeps its last values.
    pub fn cancel(&self) {
        with_tracer(&self.trace, |t| self.sync.borrow_mut().cancel(t));
        self.raf.stop();
    }

    /// Returns the countdown's lifecycle state.
    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.sync.borrow().state()
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.raf.is_running()
    }
}
