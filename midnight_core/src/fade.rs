// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading overlay fade-out.
//!
//! The overlay's `transition` is set first, then its opacity drops to zero;
//! the element is removed on the first `transitionend`.

use core::fmt;

use crate::time::{Duration, MILLIS_PER_SECOND};

/// CSS timing function for the fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// `ease`
    Ease,
    /// `linear`
    Linear,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
}

impl Easing {
    /// Returns the CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Opacity fade parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FadeOut {
    /// Transition length.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
}

impl FadeOut {
    /// Half a second, `ease`.
    pub const DEFAULT: Self = Self {
        duration: Duration(500),
        easing: Easing::Ease,
    };

    /// Returns the CSS `transition` value, e.g. `opacity 0.5s ease`.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition(*self)
    }
}

impl Default for FadeOut {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display adapter for a [`FadeOut`] as a CSS `transition` value.
#[derive(Clone, Copy, Debug)]
pub struct Transition(FadeOut);

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.0.duration.clamp_non_negative().millis();
        let secs = ms / MILLIS_PER_SECOND;
        let frac = ms % MILLIS_PER_SECOND;
        write!(f, "opacity {secs}")?;
        if frac != 0 {
            // Trailing zeros trimmed: 500 -> ".5", 250 -> ".25".
            let mut digits = frac;
            let mut width: usize = 3;
            while digits % 10 == 0 {
                digits /= 10;
                width -= 1;
            }
            write!(f, ".{digits:0width$}")?;
        }
        write!(f, "s {}", self.0.easing.as_css())
    }
}
