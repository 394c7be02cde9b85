// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock time in milliseconds.
//!
//! [`WallTime`] is a point in time as milliseconds since the Unix epoch, the
//! unit `Date.now()` reports in the browser.
//!
//! [`Duration`] is a *signed* millisecond span. The countdown's remaining time
//! goes to zero and can overshoot below it when a frame lands late, so the
//! sign is meaningful.
//!
//! [`UtcOffset`] is the local zone's offset east of UTC in whole minutes.
//! All arithmetic saturates rather than overflowing.

use core::fmt;
use core::ops::{Add, Sub};

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A point in time as milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WallTime(pub i64);

impl WallTime {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Returns the signed span from `earlier` to `self`.
    ///
    /// Negative when `earlier` is actually later.
    #[inline]
    #[must_use]
    pub const fn signed_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Saturating addition of a duration.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }

    /// Saturating subtraction of a duration.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, duration: Duration) -> Self {
        Self(self.0.saturating_sub(duration.0))
    }
}

impl Add<Duration> for WallTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for WallTime {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration) -> Self {
        self.saturating_sub(rhs)
    }
}

impl Sub for WallTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.signed_duration_since(rhs)
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallTime({}ms)", self.0)
    }
}

/// A signed span of time in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub i64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// One full day, the countdown's normalization window.
    pub const DAY: Self = Self(MILLIS_PER_DAY);

    /// Creates a duration from whole seconds.
    #[inline]
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(MILLIS_PER_SECOND))
    }

    /// Creates a duration from whole minutes.
    #[inline]
    #[must_use]
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(MILLIS_PER_MINUTE))
    }

    /// Creates a duration from whole hours.
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(MILLIS_PER_HOUR))
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Returns `true` if strictly greater than zero.
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Clamps negative spans to zero.
    #[inline]
    #[must_use]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 { Self::ZERO } else { self }
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}

/// Offset of a local time zone from UTC, in whole minutes east of UTC.
///
/// `+09:00` is `UtcOffset(540)`, `-05:00` is `UtcOffset(-300)`. Note that the
/// browser's `Date.getTimezoneOffset()` reports the opposite sign; see
/// [`UtcOffset::from_js_timezone_offset`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffset(pub i32);

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self(0);

    /// Converts the value returned by `Date.prototype.getTimezoneOffset()`
    /// (minutes *behind* UTC) into an offset east of UTC.
    #[inline]
    #[must_use]
    pub const fn from_js_timezone_offset(minutes_behind: i32) -> Self {
        Self(minutes_behind.saturating_neg())
    }

    /// Returns the raw minute value.
    #[inline]
    #[must_use]
    pub const fn minutes(self) -> i32 {
        self.0
    }

    /// Returns the offset as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_mins(self.0 as i64)
    }
}

impl fmt::Debug for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "UtcOffset({sign}{:02}:{:02})", abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn wall_time_difference_is_signed() {
        let a = WallTime(1_000);
        let b = WallTime(4_000);
        assert_eq!(b - a, Duration(3_000), "later minus earlier");
        assert_eq!(a - b, Duration(-3_000), "earlier minus later");
    }

    #[test]
    fn wall_time_duration_ops() {
        let t = WallTime(1_000);
        let d = Duration(200);
        assert_eq!((t + d).millis(), 1_200);
        assert_eq!((t - d).millis(), 800);
        assert_eq!(WallTime(i64::MAX) + d, WallTime(i64::MAX), "saturates");
    }

    #[test]
    fn duration_constructors() {
        assert_eq!(Duration::from_secs(2), Duration(2_000));
        assert_eq!(Duration::from_mins(3), Duration(180_000));
        assert_eq!(Duration::from_hours(24), Duration::DAY);
        assert_eq!(Duration::DAY.millis(), 86_400_000);
    }

    #[test]
    fn clamp_non_negative() {
        assert_eq!(Duration(-5).clamp_non_negative(), Duration::ZERO);
        assert_eq!(Duration(5).clamp_non_negative(), Duration(5));
        assert!(!Duration::ZERO.is_positive(), "zero is not positive");
    }

    #[test]
    fn js_timezone_offset_sign_flips() {
        // Tokyo reports -540 from getTimezoneOffset().
        assert_eq!(UtcOffset::from_js_timezone_offset(-540), UtcOffset(540));
        // New York (EST) reports 300.
        assert_eq!(UtcOffset::from_js_timezone_offset(300), UtcOffset(-300));
        assert_eq!(UtcOffset(-300).as_duration(), Duration::from_hours(-5));
    }

    #[test]
    fn utc_offset_debug() {
        assert_eq!(format!("{:?}", UtcOffset(330)), "UtcOffset(+05:30)");
        assert_eq!(format!("{:?}", UtcOffset(-300)), "UtcOffset(-05:00)");
    }
}
