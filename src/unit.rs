// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Arithmetic units and rounding intervals.
//!
//! # Units
//!
//! | Unit | Milliseconds |
//! |------|--------------|
//! | [`Unit::Hours`] | 3 600 000 |
//! | [`Unit::Minutes`] | 60 000 |
//! | [`Unit::Seconds`] | 1 000 |
//! | [`Unit::Milliseconds`] | 1 |
//!
//! # Intervals
//!
//! | Interval | Step |
//! |----------|------|
//! | [`Interval::Hour`] | 1 hour |
//! | [`Interval::Half`] | 30 minutes |
//! | [`Interval::Quarter`] | 15 minutes |
//! | [`Interval::Minute`] | 1 minute |
//! | [`Interval::Second`] | 1 second |
//! | [`Interval::Millisecond`] | 1 millisecond |

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Increment granularity used by [`Time::add`](crate::Time::add) and
/// [`Time::diff`](crate::Time::diff).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl Unit {
    /// Length of one unit in milliseconds.
    #[inline]
    pub const fn milliseconds(self) -> i64 {
        match self {
            Unit::Hours => MILLIS_PER_HOUR,
            Unit::Minutes => MILLIS_PER_MINUTE,
            Unit::Seconds => MILLIS_PER_SECOND,
            Unit::Milliseconds => 1,
        }
    }
}

/// Rounding granularity used by [`Time::floor`](crate::Time::floor),
/// [`Time::ceiling`](crate::Time::ceiling) and
/// [`Time::range`](crate::Time::range).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Interval {
    Hour,
    Half,
    Quarter,
    Minute,
    Second,
    Millisecond,
}

impl Interval {
    /// One step of this interval as an `(amount, unit)` pair.
    ///
    /// ```
    /// use daytime::{Interval, Unit};
    ///
    /// assert_eq!(Interval::Quarter.step(), (15, Unit::Minutes));
    /// ```
    #[inline]
    pub const fn step(self) -> (i64, Unit) {
        match self {
            Interval::Hour => (1, Unit::Hours),
            Interval::Half => (30, Unit::Minutes),
            Interval::Quarter => (15, Unit::Minutes),
            Interval::Minute => (1, Unit::Minutes),
            Interval::Second => (1, Unit::Seconds),
            Interval::Millisecond => (1, Unit::Milliseconds),
        }
    }

    /// Length of one step of this interval in milliseconds.
    #[inline]
    pub const fn milliseconds(self) -> i64 {
        let (amount, unit) = self.step();
        amount * unit.milliseconds()
    }
}
