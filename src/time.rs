// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The wrapped time-of-day value.
//!
//! [`Time`] stores hours, minutes, seconds and milliseconds.  Every
//! numeric constructor folds its input into a single millisecond count,
//! reduces it with a floor-modulo over one day, and decomposes the result
//! again, so out-of-range and negative components are carried or borrowed
//! instead of rejected.  Arithmetic goes through the same path and therefore
//! wraps around midnight.
//!
//! The only constructor that does *not* normalize is
//! [`Time::parse_iso`], which stores the parsed fields as written.

use crate::unit::{Unit, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Time
// ═══════════════════════════════════════════════════════════════════════════

/// A local time of day with millisecond precision.
///
/// `Time` is `Copy` and immutable: every operation returns a new value.
///
/// # Examples
///
/// ```
/// use daytime::{Time, Unit};
///
/// let t = Time::from_parts(9, 45, 0, 0);
/// assert_eq!(t.add(Unit::Minutes, 30).to_string(), "10:15");
/// assert_eq!(Time::from_parts(-2, 100, 61, 1500).to_string(), "23:41:02.500");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Time {
    hours: i32,
    minutes: i32,
    seconds: i32,
    milliseconds: i32,
}

impl Time {
    /// 00:00:00.000
    pub const MIDNIGHT: Self = Self::from_day_millis(0);

    /// The earliest time of day, equal to [`Time::MIDNIGHT`].
    pub const MIN: Self = Self::MIDNIGHT;

    /// The latest time of day, 23:59:59.999.
    pub const MAX: Self = Self::from_day_millis(MILLIS_PER_DAY - 1);

    // ── constructors ──────────────────────────────────────────────────

    /// Build a time from a millisecond count, wrapping into one day.
    ///
    /// Negative counts wrap backwards from midnight.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// assert_eq!(Time::from_milliseconds(-1), Time::MAX);
    /// assert_eq!(Time::from_milliseconds(86_400_000), Time::MIDNIGHT);
    /// ```
    #[inline]
    pub fn from_milliseconds(ms: i64) -> Self {
        Self::from_day_millis(ms.rem_euclid(MILLIS_PER_DAY))
    }

    /// Build a time from a second count, wrapping into one day.
    #[inline]
    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_wide_millis(seconds as i128 * MILLIS_PER_SECOND as i128)
    }

    /// Build a time from arbitrary components.
    ///
    /// The components may be negative or exceed their nominal range; they
    /// are combined linearly and the total is wrapped into one day.
    #[inline]
    pub fn from_parts(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Self {
        let total = milliseconds as i128
            + 1_000 * (seconds as i128 + 60 * (minutes as i128 + 60 * hours as i128));
        Self::from_wide_millis(total)
    }

    /// Wall-clock time of day of a Unix timestamp (in milliseconds) seen
    /// from a zone `offset_minutes` east of UTC.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// // 2024-01-01T23:30:00Z seen from UTC+02:00
    /// let t = Time::from_timestamp_with_offset(1_704_151_800_000, 120);
    /// assert_eq!(t, Time::from_parts(1, 30, 0, 0));
    /// ```
    #[inline]
    pub fn from_timestamp_with_offset(timestamp_ms: i64, offset_minutes: i64) -> Self {
        Self::from_wide_millis(
            timestamp_ms as i128 + offset_minutes as i128 * MILLIS_PER_MINUTE as i128,
        )
    }

    /// Local time of day of a `chrono` date-time, in the date-time's own zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from(datetime.time())
    }

    /// Stores the fields verbatim; only the ISO parser uses this.
    #[inline]
    pub(crate) const fn from_raw(
        hours: i32,
        minutes: i32,
        seconds: i32,
        milliseconds: i32,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    #[inline]
    fn from_wide_millis(ms: i128) -> Self {
        // The remainder is below one day, so it always fits in i64.
        Self::from_day_millis(ms.rem_euclid(MILLIS_PER_DAY as i128) as i64)
    }

    /// `ms` must already lie in `[0, MILLIS_PER_DAY)`.
    #[inline]
    const fn from_day_millis(ms: i64) -> Self {
        Self {
            hours: (ms / MILLIS_PER_HOUR) as i32,
            minutes: (ms % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as i32,
            seconds: (ms % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as i32,
            milliseconds: (ms % MILLIS_PER_SECOND) as i32,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hours(&self) -> i32 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    #[inline]
    pub const fn milliseconds(&self) -> i32 {
        self.milliseconds
    }

    /// Milliseconds since midnight.
    #[inline]
    pub const fn total_milliseconds(&self) -> i64 {
        self.milliseconds as i64
            + MILLIS_PER_SECOND
                * (self.seconds as i64 + 60 * (self.minutes as i64 + 60 * self.hours as i64))
    }

    /// Whole seconds since midnight; the millisecond remainder is dropped.
    #[inline]
    pub const fn total_seconds(&self) -> i64 {
        self.total_milliseconds() / MILLIS_PER_SECOND
    }

    /// Convert to a `chrono::NaiveTime`.
    ///
    /// Returns `None` only for values parsed from out-of-range ISO text.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            u32::try_from(self.hours).ok()?,
            u32::try_from(self.minutes).ok()?,
            u32::try_from(self.seconds).ok()?,
            u32::try_from(self.milliseconds).ok()?,
        )
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Add `amount` units, wrapping around midnight in either direction.
    ///
    /// ```
    /// use daytime::{Time, Unit};
    ///
    /// let late = Time::from_parts(23, 30, 0, 0);
    /// assert_eq!(late.add(Unit::Hours, 1), Time::from_parts(0, 30, 0, 0));
    /// assert_eq!(Time::MIDNIGHT.add(Unit::Seconds, -1), Time::from_parts(23, 59, 59, 0));
    /// ```
    #[inline]
    pub fn add(self, unit: Unit, amount: i64) -> Self {
        Self::from_wide_millis(
            self.total_milliseconds() as i128 + amount as i128 * unit.milliseconds() as i128,
        )
    }

    /// Whole `unit`s from `other` to `self`, truncated toward zero.
    ///
    /// Positive when `self` is later than `other`.
    ///
    /// ```
    /// use daytime::{Time, Unit};
    ///
    /// let ten = Time::from_parts(10, 0, 0, 0);
    /// let eight = Time::from_parts(8, 0, 0, 0);
    /// assert_eq!(ten.diff(Unit::Minutes, eight), 120);
    /// assert_eq!(eight.diff(Unit::Minutes, ten), -120);
    /// ```
    #[inline]
    pub fn diff(self, unit: Unit, other: Time) -> i64 {
        let delta = self.total_milliseconds() - other.total_milliseconds();
        delta.signum() * (delta.abs() / unit.milliseconds())
    }

    // ── ordering ──────────────────────────────────────────────────────

    /// Total order by milliseconds since midnight.
    ///
    /// Unlike [`Ord`], this ignores how the fields are split, so
    /// `00:60:00` and `01:00:00` compare as equal.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.total_milliseconds().cmp(&other.total_milliseconds())
    }

    /// The earlier of two times; `self` on a tie.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.compare(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// The later of two times; `self` on a tie.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.compare(&self) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Restrict `self` to `[lo, hi]`.  The bounds may be given in either order.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// let nine = Time::from_parts(9, 0, 0, 0);
    /// let five = Time::from_parts(17, 0, 0, 0);
    /// let late = Time::from_parts(20, 0, 0, 0);
    /// assert_eq!(late.clamp(nine, five), five);
    /// assert_eq!(late.clamp(five, nine), five);
    /// ```
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let (lo, hi) = if lo.compare(&hi) == Ordering::Greater {
            (hi, lo)
        } else {
            (lo, hi)
        };
        lo.max(hi.min(self))
    }

    /// Whether `self` lies in the inclusive range spanned by `lo` and `hi`.
    #[inline]
    pub fn is_between(self, lo: Self, hi: Self) -> bool {
        self.clamp(lo, hi).compare(&self) == Ordering::Equal
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Default for Time {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

// Ties on the millisecond count only occur between unnormalized parse
// results; the field comparison keeps `Ord` consistent with `Eq`.
// `Time::compare` is the tie-free order on the millisecond count alone.
impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_milliseconds()
            .cmp(&other.total_milliseconds())
            .then_with(|| {
                (self.hours, self.minutes, self.seconds, self.milliseconds).cmp(&(
                    other.hours,
                    other.minutes,
                    other.seconds,
                    other.milliseconds,
                ))
            })
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── chrono ────────────────────────────────────────────────────────────────

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        // Leap-second nanoseconds (≥ 1e9) carry into the next second.
        Self::from_parts(
            time.hour().into(),
            time.minute().into(),
            time.second().into(),
            (time.nanosecond() / 1_000_000).into(),
        )
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

fn duration_millis(duration: std::time::Duration) -> i64 {
    // Whole days are a no-op on a time of day.
    (duration.as_millis() % MILLIS_PER_DAY as u128) as i64
}

impl Add<std::time::Duration> for Time {
    type Output = Self;
    #[inline]
    fn add(self, rhs: std::time::Duration) -> Self::Output {
        Time::add(self, Unit::Milliseconds, duration_millis(rhs))
    }
}

impl AddAssign<std::time::Duration> for Time {
    #[inline]
    fn add_assign(&mut self, rhs: std::time::Duration) {
        *self = *self + rhs;
    }
}

impl Sub<std::time::Duration> for Time {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: std::time::Duration) -> Self::Output {
        Time::add(self, Unit::Milliseconds, -duration_millis(rhs))
    }
}

impl SubAssign<std::time::Duration> for Time {
    #[inline]
    fn sub_assign(&mut self, rhs: std::time::Duration) {
        *self = *self - rhs;
    }
}

/// Signed difference in milliseconds.
impl Sub for Time {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.total_milliseconds() - rhs.total_milliseconds()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeVisitor;

        impl de::Visitor<'_> for TimeVisitor {
            type Value = Time;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a time of day formatted as HH:MM:SS or HH:MM:SS.mmm")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Time, E> {
                Time::decode(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        Time::from_milliseconds(<i64 as quickcheck::Arbitrary>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Time>> {
        Box::new(
            quickcheck::Arbitrary::shrink(&self.total_milliseconds()).map(Time::from_milliseconds),
        )
    }
}
