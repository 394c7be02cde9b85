// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `HH:MM:SS` rendering of a remaining duration.
//!
//! Decomposition floors at every step: 59 999 ms is `00:00:59`, never
//! `00:01:00`. Negative spans render as `00:00:00`.

use core::fmt;

use crate::time::{Duration, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// A duration split into whole hours, minutes and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hms {
    /// Whole hours. Not reduced modulo 24.
    pub hours: u64,
    /// Whole minutes, `0..60`.
    pub minutes: u8,
    /// Whole seconds, `0..60`.
    pub seconds: u8,
}

impl Hms {
    /// Splits `remaining` into fields, discarding sub-second precision.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "input is clamped non-negative; minute and second fields are < 60"
    )]
    pub const fn from_remaining(remaining: Duration) -> Self {
        let ms = remaining.clamp_non_negative().millis();
        Self {
            hours: (ms / MILLIS_PER_HOUR) as u64,
            minutes: ((ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
        }
    }

    /// Returns `true` when the hours field needs more than two digits.
    ///
    /// Only possible for targets more than 100 hours away, which
    /// [`next_midnight`](crate::target::next_midnight) never produces.
    #[must_use]
    pub const fn hours_overflow(&self) -> bool {
        self.hours > 99
    }
}

/// Zero-pads every field to two digits. Hours wider than two digits are
/// printed in full rather than truncated.
impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn render(ms: i64) -> alloc::string::String {
        Hms::from_remaining(Duration(ms)).to_string()
    }

    #[test]
    fn one_hour_one_minute_one_second() {
        assert_eq!(render(3_661_000), "01:01:01");
    }

    #[test]
    fn zero() {
        assert_eq!(render(0), "00:00:00");
    }

    #[test]
    fn floors_instead_of_rounding() {
        assert_eq!(render(59_999), "00:00:59", "just under a minute");
        assert_eq!(render(999), "00:00:00", "just under a second");
        assert_eq!(render(3_599_999), "00:59:59", "just under an hour");
    }

    #[test]
    fn full_day() {
        assert_eq!(render(86_400_000), "24:00:00");
        assert_eq!(render(86_399_999), "23:59:59");
    }

    #[test]
    fn negative_renders_as_zero() {
        assert_eq!(render(-1), "00:00:00");
        assert_eq!(render(-3_661_000), "00:00:00");
    }

    #[test]
    fn wide_hours_are_not_truncated() {
        let hms = Hms::from_remaining(Duration::from_hours(123));
        assert!(hms.hours_overflow(), "123 hours needs three digits");
        assert_eq!(hms.to_string(), "123:00:00");
        assert!(!Hms::from_remaining(Duration::DAY).hours_overflow(), "a day fits");
    }

    #[test]
    fn every_field_is_two_digits_within_a_day() {
        let mut ms = 0;
        while ms <= 86_400_000 {
            let text = render(ms);
            assert_eq!(text.len(), 8, "{text} is HH:MM:SS");
            assert_eq!(&text[2..3], ":");
            assert_eq!(&text[5..6], ":");
            ms += 7_777_777;
        }
    }
}
