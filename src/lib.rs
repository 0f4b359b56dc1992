// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day values.
//!
//! This crate provides [`Time`], an immutable local time of day with
//! millisecond precision, and the operations around it.
//!
//! # Core types
//!
//! - [`Time`] — hours, minutes, seconds and milliseconds within one day.
//! - [`Unit`] — arithmetic granularity for [`Time::add`] and [`Time::diff`].
//! - [`Interval`] — rounding granularity for [`Time::floor`],
//!   [`Time::ceiling`] and [`Time::range`].
//! - [`Language`] — AM/PM markers for [`Time::format_with_language`].
//! - [`Error`] — failures of [`Time::decode`] and [`Time::range`].
//!
//! # Normalization
//!
//! Numeric constructors never fail.  Components are combined into a
//! millisecond count which is wrapped into `[0, 86 400 000)`:
//!
//! ```
//! use daytime::Time;
//!
//! let t = Time::from_parts(-2, 100, 61, 1500);
//! assert_eq!((t.hours(), t.minutes(), t.seconds(), t.milliseconds()), (23, 41, 2, 500));
//! ```
//!
//! # Text
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | [`Time::to_iso_string`] / [`Display`](std::fmt::Display) | `HH:MM`, `HH:MM:SS` or `HH:MM:SS.mmm` |
//! | [`Time::parse_iso`] | `HH:MM:SS` or `HH:MM:SS.mmm` |
//! | [`Time::format`] | pattern language, see [`pattern`] |
//!
//! # Features
//!
//! - `serde` — (de)serialize [`Time`] as its ISO string.
//! - `logging` — emit diagnostics through the `log` facade.

#[macro_use]
mod logging;

mod error;
mod iso;
pub mod pattern;
mod round;
mod time;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{Error, Result};
pub use pattern::Language;
pub use time::Time;
pub use unit::{Interval, Unit};
