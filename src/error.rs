// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the fallible entry points of the crate.
//!
//! Almost every operation on [`Time`](crate::Time) is total: numeric input is
//! normalized rather than rejected. Only textual decoding and range
//! generation can fail.

/// Errors returned by [`Time::decode`](crate::Time::decode) and
/// [`Time::range`](crate::Time::range).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text is not of the form `HH:MM:SS` or `HH:MM:SS.mmm`.
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
    /// A range was requested with a non-positive step.
    #[error("range step must be positive, got {0}")]
    InvalidStep(i64),
}

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message_quotes_input() {
        let err = Error::InvalidFormat("12-30".to_string());
        assert_eq!(err.to_string(), "Invalid time format: 12-30");
    }

    #[test]
    fn test_invalid_step_message() {
        assert_eq!(
            Error::InvalidStep(0).to_string(),
            "range step must be positive, got 0"
        );
    }
}
