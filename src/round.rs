// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interval rounding and stepped ranges.

use crate::error::{Error, Result};
use crate::time::Time;
use crate::unit::Interval;
use std::cmp::Ordering;

impl Time {
    /// Round down to the start of the enclosing `interval`.
    ///
    /// ```
    /// use daytime::{Interval, Time};
    ///
    /// let t = Time::from_parts(9, 20, 1, 0);
    /// assert_eq!(t.floor(Interval::Quarter), Time::from_parts(9, 15, 0, 0));
    /// assert_eq!(t.floor(Interval::Hour), Time::from_parts(9, 0, 0, 0));
    /// ```
    pub fn floor(self, interval: Interval) -> Time {
        let (h, m, s) = (
            i64::from(self.hours()),
            i64::from(self.minutes()),
            i64::from(self.seconds()),
        );
        match interval {
            Interval::Hour => Time::from_parts(h, 0, 0, 0),
            Interval::Half => Time::from_parts(h, m - m.rem_euclid(30), 0, 0),
            Interval::Quarter => Time::from_parts(h, m - m.rem_euclid(15), 0, 0),
            Interval::Minute => Time::from_parts(h, m, 0, 0),
            Interval::Second => Time::from_parts(h, m, s, 0),
            Interval::Millisecond => self,
        }
    }

    /// Round up to the next `interval` boundary.
    ///
    /// Values already on a boundary are returned unchanged.
    ///
    /// ```
    /// use daytime::{Interval, Time};
    ///
    /// assert_eq!(
    ///     Time::from_parts(9, 0, 0, 0).ceiling(Interval::Hour),
    ///     Time::from_parts(9, 0, 0, 0)
    /// );
    /// assert_eq!(
    ///     Time::from_parts(9, 0, 1, 0).ceiling(Interval::Hour),
    ///     Time::from_parts(10, 0, 0, 0)
    /// );
    /// ```
    pub fn ceiling(self, interval: Interval) -> Time {
        let floored = self.floor(interval);
        if floored == self {
            self
        } else {
            let (amount, unit) = interval.step();
            floored.add(unit, amount)
        }
    }

    /// Times on `interval` boundaries from `start` up to and including `end`,
    /// `step` intervals apart.
    ///
    /// The first element is `start` rounded up with
    /// [`ceiling`](Time::ceiling).  Each following element is the previous
    /// one advanced by `step` intervals and rounded up again.  Generation
    /// stops at the first value past `end`, and also as soon as a value
    /// wraps past midnight, so the result is strictly increasing.  A start
    /// whose ceiling wraps to midnight begins the range at 00:00.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStep`] if `step` is not positive.
    ///
    /// ```
    /// use daytime::{Interval, Time};
    ///
    /// let times = Time::range(
    ///     Interval::Half,
    ///     3,
    ///     Time::from_parts(9, 0, 0, 0),
    ///     Time::from_parts(17, 0, 0, 0),
    /// )?;
    /// let labels: Vec<String> = times.iter().map(Time::to_iso_string).collect();
    /// assert_eq!(labels, ["09:00", "10:30", "12:00", "13:30", "15:00", "16:30"]);
    /// # Ok::<(), daytime::Error>(())
    /// ```
    pub fn range(interval: Interval, step: i64, start: Time, end: Time) -> Result<Vec<Time>> {
        if step <= 0 {
            warn!("refusing time range with non-positive step {}", step);
            return Err(Error::InvalidStep(step));
        }

        let (amount, unit) = interval.step();
        let advance = step.saturating_mul(amount);

        let mut times = Vec::new();
        let mut current = start.ceiling(interval);
        while current.compare(&end) != Ordering::Greater {
            times.push(current);
            let next = current.add(unit, advance).ceiling(interval);
            if next.compare(&current) != Ordering::Greater {
                trace!("time range stopped at {} after wrapping", current);
                break;
            }
            current = next;
        }
        Ok(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: i64, m: i64, s: i64) -> Time {
        Time::from_parts(h, m, s, 0)
    }

    #[test]
    fn test_floor_each_interval() {
        let t = Time::from_parts(9, 47, 31, 250);
        assert_eq!(t.floor(Interval::Hour), time(9, 0, 0));
        assert_eq!(t.floor(Interval::Half), time(9, 30, 0));
        assert_eq!(t.floor(Interval::Quarter), time(9, 45, 0));
        assert_eq!(t.floor(Interval::Minute), time(9, 47, 0));
        assert_eq!(t.floor(Interval::Second), time(9, 47, 31));
        assert_eq!(t.floor(Interval::Millisecond), t);
    }

    #[test]
    fn test_floor_quarter_example() {
        assert_eq!(time(9, 20, 1).floor(Interval::Quarter), time(9, 15, 0));
    }

    #[test]
    fn test_ceiling_on_boundary_is_identity() {
        assert_eq!(time(9, 0, 0).ceiling(Interval::Hour), time(9, 0, 0));
        assert_eq!(time(9, 30, 0).ceiling(Interval::Half), time(9, 30, 0));
        let t = Time::from_parts(9, 0, 0, 1);
        assert_eq!(t.ceiling(Interval::Millisecond), t);
    }

    #[test]
    fn test_ceiling_advances_one_step() {
        assert_eq!(time(9, 0, 1).ceiling(Interval::Hour), time(10, 0, 0));
        assert_eq!(time(9, 31, 0).ceiling(Interval::Half), time(10, 0, 0));
        assert_eq!(time(9, 1, 0).ceiling(Interval::Quarter), time(9, 15, 0));
        assert_eq!(
            Time::from_parts(9, 0, 0, 1).ceiling(Interval::Second),
            time(9, 0, 1)
        );
    }

    #[test]
    fn test_ceiling_wraps_at_midnight() {
        assert_eq!(time(23, 10, 0).ceiling(Interval::Hour), Time::MIDNIGHT);
    }

    #[test]
    fn test_range_half_hours_every_three() {
        let times = Time::range(Interval::Half, 3, time(9, 0, 0), time(17, 0, 0)).unwrap();
        assert_eq!(
            times,
            vec![
                time(9, 0, 0),
                time(10, 30, 0),
                time(12, 0, 0),
                time(13, 30, 0),
                time(15, 0, 0),
                time(16, 30, 0),
            ]
        );
    }

    #[test]
    fn test_range_includes_end_on_boundary() {
        let times = Time::range(Interval::Hour, 1, time(9, 0, 0), time(12, 0, 0)).unwrap();
        assert_eq!(times.len(), 4);
        assert_eq!(times.last(), Some(&time(12, 0, 0)));
    }

    #[test]
    fn test_range_rounds_start_up() {
        let times = Time::range(Interval::Quarter, 1, time(9, 5, 0), time(9, 50, 0)).unwrap();
        assert_eq!(
            times,
            vec![time(9, 15, 0), time(9, 30, 0), time(9, 45, 0)]
        );
    }

    #[test]
    fn test_range_empty_when_start_after_end() {
        let times = Time::range(Interval::Hour, 1, time(18, 0, 0), time(9, 0, 0)).unwrap();
        assert!(times.is_empty());
    }

    #[test]
    fn test_range_stops_at_midnight() {
        let times = Time::range(Interval::Hour, 1, time(22, 0, 0), Time::MAX).unwrap();
        assert_eq!(times, vec![time(22, 0, 0), time(23, 0, 0)]);
    }

    #[test]
    fn test_range_start_ceiling_wrapping_covers_whole_day() {
        let times = Time::range(Interval::Hour, 1, time(23, 30, 0), Time::MAX).unwrap();
        assert_eq!(times.len(), 24);
        assert_eq!(times.first(), Some(&Time::MIDNIGHT));
        assert_eq!(times.last(), Some(&time(23, 0, 0)));
    }

    #[test]
    fn test_range_start_ceiling_wrapping_runs_to_early_end() {
        let times = Time::range(Interval::Hour, 1, time(23, 30, 0), time(5, 0, 0)).unwrap();
        assert_eq!(
            times,
            vec![
                time(0, 0, 0),
                time(1, 0, 0),
                time(2, 0, 0),
                time(3, 0, 0),
                time(4, 0, 0),
                time(5, 0, 0),
            ]
        );
    }

    #[test]
    fn test_range_end_bound_compares_by_total() {
        let end = Time::parse_iso("09:60:00").unwrap();
        let times = Time::range(Interval::Hour, 1, time(9, 0, 0), end).unwrap();
        assert_eq!(times, vec![time(9, 0, 0), time(10, 0, 0)]);
    }

    #[test]
    fn test_range_full_day_of_hours() {
        let times = Time::range(Interval::Hour, 1, Time::MIDNIGHT, Time::MAX).unwrap();
        assert_eq!(times.len(), 24);
    }

    #[test]
    fn test_range_rejects_non_positive_step() {
        assert_eq!(
            Time::range(Interval::Minute, 0, time(9, 0, 0), time(10, 0, 0)),
            Err(Error::InvalidStep(0))
        );
        assert_eq!(
            Time::range(Interval::Minute, -2, time(9, 0, 0), time(10, 0, 0)),
            Err(Error::InvalidStep(-2))
        );
    }

    #[test]
    fn test_range_is_restartable() {
        let a = Time::range(Interval::Quarter, 2, time(8, 7, 0), time(11, 0, 0)).unwrap();
        let b = Time::range(Interval::Quarter, 2, time(8, 7, 0), time(11, 0, 0)).unwrap();
        assert_eq!(a, b);
    }

    quickcheck::quickcheck! {
        fn prop_floor_le_value_le_ceiling(t: Time) -> bool {
            [
                Interval::Hour,
                Interval::Half,
                Interval::Quarter,
                Interval::Minute,
                Interval::Second,
                Interval::Millisecond,
            ]
            .into_iter()
            .all(|interval| {
                let floored = t.floor(interval);
                let ceiled = t.ceiling(interval);
                let within_step = ceiled == Time::MIDNIGHT
                    || ceiled - floored <= interval.milliseconds();
                floored <= t && within_step
            })
        }
    }
}
