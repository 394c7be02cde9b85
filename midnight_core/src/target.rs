// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target instant derivation.

use crate::time::{Duration, MILLIS_PER_DAY, UtcOffset, WallTime};

/// Returns the next local midnight strictly after `now`.
///
/// Local time is `now + offset`. The result is the start of the following
/// local day, converted back to UTC, which is equivalent to setting the local
/// hour to 24 and every smaller field to zero. If `now` is exactly midnight the
/// target is the *next* midnight, a full day away.
///
/// The offset is applied once, at `now`. Use [`next_midnight_in_zone`] when
/// the offset may change before the target.
#[must_use]
pub fn next_midnight(now: WallTime, offset: UtcOffset) -> WallTime {
    let local = now.millis().saturating_add(offset.as_duration().millis());
    let start_of_day = local.div_euclid(MILLIS_PER_DAY).saturating_mul(MILLIS_PER_DAY);
    let next_local = start_of_day.saturating_add(MILLIS_PER_DAY);
    WallTime(next_local) - offset.as_duration()
}

/// Returns the next local midnight strictly after `now`, resolved with the
/// offset in effect at that midnight rather than the one in effect now.
///
/// `offset_at` reports the zone's offset at a given instant. A candidate is
/// derived with the offset at `now`, then re-derived once with the offset at
/// the candidate. When the zone falls back at midnight this lands on the later
/// midnight. When midnight itself is skipped the re-derived instant still
/// reads the old offset, so the candidate (the first instant of the new day)
/// is kept.
///
/// Returns the target and the offset it was resolved with.
#[must_use]
pub fn next_midnight_in_zone(
    now: WallTime,
    offset_at: impl Fn(WallTime) -> UtcOffset,
) -> (WallTime, UtcOffset) {
    let offset = offset_at(now);
    let candidate = next_midnight(now, offset);
    let at_candidate = offset_at(candidate);
    if at_candidate == offset {
        return (candidate, offset);
    }
    let local_midnight = candidate + offset.as_duration();
    let adjusted = local_midnight - at_candidate.as_duration();
    if adjusted > now && offset_at(adjusted) == at_candidate {
        (adjusted, at_candidate)
    } else {
        (candidate, offset)
    }
}

/// Returns the local time of day of `now`, as a span since local midnight.
#[must_use]
pub fn time_of_day(now: WallTime, offset: UtcOffset) -> Duration {
    let local = now.millis().saturating_add(offset.as_duration().millis());
    Duration(local.rem_euclid(MILLIS_PER_DAY))
}
