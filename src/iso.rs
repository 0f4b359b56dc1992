// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO-8601 subset: `HH:MM`, `HH:MM:SS` and `HH:MM:SS.mmm`.
//!
//! The serializer always picks the shortest of the three shapes that keeps
//! the value's seconds and milliseconds.  The parser accepts exactly three
//! colon-separated segments, the last one optionally carrying a decimal
//! fraction, and stores the numbers as written.

use crate::error::{Error, Result};
use crate::time::Time;
use std::fmt;
use std::str::FromStr;

impl Time {
    /// Parse `HH:MM:SS` or `HH:MM:SS.mmm`.
    ///
    /// Hours and minutes are integers; the seconds segment is a decimal
    /// number whose fraction is truncated to milliseconds.  Out-of-range
    /// numbers are kept as-is rather than normalized.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// assert_eq!(Time::parse_iso("08:15:30.25"), Some(Time::from_parts(8, 15, 30, 250)));
    /// assert_eq!(Time::parse_iso("08:15"), None);
    /// assert_eq!(Time::parse_iso("25:00:00").map(|t| t.hours()), Some(25));
    /// ```
    pub fn parse_iso(text: &str) -> Option<Time> {
        let mut segments = text.split(':');
        let (Some(hours), Some(minutes), Some(seconds), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return None;
        };

        let hours = hours.parse::<i32>().ok()?;
        let minutes = minutes.parse::<i32>().ok()?;
        let (seconds, milliseconds) = parse_seconds(seconds)?;
        Some(Time::from_raw(hours, minutes, seconds, milliseconds))
    }

    /// Render as `HH:MM`, `HH:MM:SS` or `HH:MM:SS.mmm`.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// assert_eq!(Time::from_parts(9, 5, 0, 0).to_iso_string(), "09:05");
    /// assert_eq!(Time::from_parts(9, 5, 7, 0).to_iso_string(), "09:05:07");
    /// assert_eq!(Time::from_parts(9, 5, 0, 30).to_iso_string(), "09:05:00.030");
    /// ```
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// Serialize for storage or interchange; identical to
    /// [`to_iso_string`](Time::to_iso_string).
    #[inline]
    pub fn encode(&self) -> String {
        self.to_iso_string()
    }

    /// Parse a stored value, reporting the offending text on failure.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// let err = Time::decode("noon").unwrap_err();
    /// assert_eq!(err.to_string(), "Invalid time format: noon");
    /// ```
    pub fn decode(text: &str) -> Result<Time> {
        Time::parse_iso(text).ok_or_else(|| {
            debug!("rejected time text {:?}", text);
            Error::InvalidFormat(text.to_string())
        })
    }
}

/// Split a seconds segment into whole seconds and milliseconds.
///
/// The milliseconds are `floor(1000 * fraction) mod 1000`, computed on the
/// decimal digits directly so that e.g. `"05.123"` yields 123 exactly.
fn parse_seconds(text: &str) -> Option<(i32, i32)> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = if whole.is_empty() {
        0
    } else {
        whole.parse::<i32>().ok()?
    };
    let seconds = if negative { -magnitude } else { magnitude };

    let mut truncated = 0;
    for i in 0..3 {
        let digit = fraction.as_bytes().get(i).map_or(0, |b| b - b'0');
        truncated = truncated * 10 + i32::from(digit);
    }
    let remainder = fraction.bytes().skip(3).any(|b| b != b'0');
    let floored = if negative {
        -truncated - i32::from(remainder)
    } else {
        truncated
    };
    Some((seconds, floored.rem_euclid(1_000)))
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())?;
        if self.seconds() != 0 || self.milliseconds() != 0 {
            write!(f, ":{:02}", self.seconds())?;
        }
        if self.milliseconds() != 0 {
            write!(f, ".{:03}", self.milliseconds())?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Time::decode(s)
    }
}
