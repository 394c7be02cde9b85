// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elapsed-fraction progress.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::time::Duration;

/// Percentage of a window that has elapsed, always within `0.0..=100.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// No time elapsed.
    pub const EMPTY: Self = Self(0.0);
    /// The whole window elapsed.
    pub const FULL: Self = Self(100.0);

    /// Computes `(total - remaining) / total * 100`, clamped to `[0, 100]`.
    ///
    /// A non-positive `total` yields [`Progress::FULL`].
    #[must_use]
    pub fn from_remaining(total: Duration, remaining: Duration) -> Self {
        if !total.is_positive() {
            return Self::FULL;
        }
        let total_ms = total.millis() as f64;
        let elapsed_ms = total.saturating_sub(remaining).millis() as f64;
        Self((elapsed_ms / total_ms * 100.0).clamp(0.0, 100.0))
    }

    /// Returns the percentage value.
    #[inline]
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Returns `true` once the whole window has elapsed.
    #[inline]
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }

    /// Writes the value as a CSS percentage length (`"37.5%"`) into `out`,
    /// replacing its contents.
    pub fn write_css_width(self, out: &mut String) {
        out.clear();
        let _ = write!(out, "{self}");
    }
}

/// Renders as a CSS percentage length, e.g. `50%`.
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
