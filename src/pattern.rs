// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Display formatting driven by a small pattern language.
//!
//! A pattern is a mix of field runs and literal text.  A run of the same
//! field character forms one field; the run length picks the padding or
//! verbosity:
//!
//! | Field | Length 1 | Length 2 | Length ≥ 3 |
//! |-------|----------|----------|------------|
//! | `h` | hour mod 12 (0–11) | zero-padded | zero-padded |
//! | `H` | hour 0–23 | zero-padded | zero-padded |
//! | `m` | minute | zero-padded | zero-padded |
//! | `s` | second | zero-padded | zero-padded |
//! | `a` | first char of AM/PM marker | full marker | full marker |
//! | `f` | `.` + tenths | `.` + hundredths | `.` + milliseconds |
//!
//! Any other character is copied verbatim.  Text between single quotes is
//! copied verbatim too, and `''` stands for one literal quote both inside
//! and outside a quoted span.  An unterminated quote makes the rest of the
//! pattern literal.
//!
//! Note that `h` yields 0–11: midnight and noon render as `0`, not `12`.

use crate::time::Time;

const FIELD_CHARS: [char; 6] = ['h', 'H', 'm', 's', 'a', 'f'];

/// AM/PM markers used by the `a` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language<'a> {
    pub am: &'a str,
    pub pm: &'a str,
}

impl<'a> Language<'a> {
    /// `"am."` / `"pm."`
    pub const ENGLISH: Language<'static> = Language {
        am: "am.",
        pm: "pm.",
    };

    pub const fn new(am: &'a str, pm: &'a str) -> Self {
        Language { am, pm }
    }

    /// The marker for `hours`: AM before noon, PM from noon on.
    #[inline]
    pub fn marker(&self, hours: i32) -> &'a str {
        if hours < 12 {
            self.am
        } else {
            self.pm
        }
    }
}

impl Default for Language<'static> {
    fn default() -> Self {
        Language::ENGLISH
    }
}

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied to the output unchanged.
    Literal(String),
    /// A run of `len` copies of the field character `ch`.
    Field { ch: char, len: usize },
}

/// Split a pattern into literal runs and field runs.
///
/// Never fails: an unterminated quote turns the remainder, quote included,
/// into literal text.
///
/// ```
/// use daytime::pattern::{tokenize, Token};
///
/// assert_eq!(
///     tokenize("HH'h'"),
///     vec![Token::Field { ch: 'H', len: 2 }, Token::Literal("h".to_string())],
/// );
/// ```
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c == '\'' {
            if chars.next_if(|&(_, next)| next == '\'').is_some() {
                literal.push('\'');
                continue;
            }
            // Inside a quoted span until the closing quote.
            let mut quoted = String::new();
            let mut closed = false;
            while let Some((_, q)) = chars.next() {
                if q != '\'' {
                    quoted.push(q);
                } else if chars.next_if(|&(_, next)| next == '\'').is_some() {
                    quoted.push('\'');
                } else {
                    closed = true;
                    break;
                }
            }
            if closed {
                literal.push_str(&quoted);
            } else {
                literal.push_str(&pattern[start..]);
            }
        } else if FIELD_CHARS.contains(&c) {
            let mut len = 1;
            while chars.next_if(|&(_, next)| next == c).is_some() {
                len += 1;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field { ch: c, len });
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

fn render_field(out: &mut String, language: &Language<'_>, time: &Time, ch: char, len: usize) {
    let padded = len >= 2;
    let number = |out: &mut String, value: i32| {
        if padded {
            out.push_str(&format!("{value:02}"));
        } else {
            out.push_str(&value.to_string());
        }
    };
    match ch {
        'h' => number(out, time.hours().rem_euclid(12)),
        'H' => number(out, time.hours()),
        'm' => number(out, time.minutes()),
        's' => number(out, time.seconds()),
        'a' => {
            let marker = language.marker(time.hours());
            if padded {
                out.push_str(marker);
            } else if let Some(first) = marker.chars().next() {
                out.push(first);
            }
        }
        'f' => {
            let millis = time.milliseconds();
            let fraction = match len {
                1 => format!(".{}", millis / 100),
                2 => format!(".{:02}", millis / 10),
                _ => format!(".{millis:03}"),
            };
            out.push_str(&fraction);
        }
        _ => {}
    }
}

impl Time {
    /// Format with the English AM/PM markers.
    ///
    /// ```
    /// use daytime::Time;
    ///
    /// let t = Time::from_parts(13, 30, 0, 0);
    /// assert_eq!(t.format("hh'h and' mm 'minutes'"), "01h and 30 minutes");
    /// assert_eq!(t.format("H:mm aa"), "13:30 pm.");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        self.format_with_language(&Language::ENGLISH, pattern)
    }

    /// Format with caller-supplied AM/PM markers.
    pub fn format_with_language(&self, language: &Language<'_>, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        for token in tokenize(pattern) {
            match token {
                Token::Literal(text) => out.push_str(&text),
                Token::Field { ch, len } => render_field(&mut out, language, self, ch, len),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: i64, m: i64, s: i64, ms: i64) -> Time {
        Time::from_parts(h, m, s, ms)
    }

    #[test]
    fn test_tokenize_fields_and_literals() {
        assert_eq!(
            tokenize("HH:mm"),
            vec![
                Token::Field { ch: 'H', len: 2 },
                Token::Literal(":".to_string()),
                Token::Field { ch: 'm', len: 2 },
            ]
        );
    }

    #[test]
    fn test_tokenize_non_field_letters_are_literal() {
        assert_eq!(
            tokenize("xyz"),
            vec![Token::Literal("xyz".to_string())]
        );
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(tokenize("'hms'"), vec![Token::Literal("hms".to_string())]);
        assert_eq!(tokenize("''"), vec![Token::Literal("'".to_string())]);
        assert_eq!(
            tokenize("'it''s'"),
            vec![Token::Literal("it's".to_string())]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote_is_literal() {
        assert_eq!(
            tokenize("HH 'oops mm"),
            vec![
                Token::Field { ch: 'H', len: 2 },
                Token::Literal(" 'oops mm".to_string()),
            ]
        );
    }

    #[test]
    fn test_format_quoted_words_between_fields() {
        assert_eq!(
            time(13, 30, 0, 0).format("hh'h and' mm 'minutes'"),
            "01h and 30 minutes"
        );
    }

    #[test]
    fn test_format_hour_fields() {
        let t = time(13, 5, 7, 0);
        assert_eq!(t.format("h"), "1");
        assert_eq!(t.format("hh"), "01");
        assert_eq!(t.format("H"), "13");
        assert_eq!(t.format("HHH"), "13");
        assert_eq!(time(3, 0, 0, 0).format("HH"), "03");
    }

    #[test]
    fn test_format_h_is_zero_based() {
        assert_eq!(time(0, 0, 0, 0).format("h"), "0");
        assert_eq!(time(12, 0, 0, 0).format("h"), "0");
        assert_eq!(time(23, 0, 0, 0).format("hh"), "11");
    }

    #[test]
    fn test_format_minute_second_fields() {
        let t = time(8, 4, 9, 0);
        assert_eq!(t.format("m:s"), "4:9");
        assert_eq!(t.format("mm:ss"), "04:09");
    }

    #[test]
    fn test_format_markers() {
        assert_eq!(time(9, 0, 0, 0).format("a"), "a");
        assert_eq!(time(9, 0, 0, 0).format("aa"), "am.");
        assert_eq!(time(12, 0, 0, 0).format("aaa"), "pm.");

        let german = Language::new("vorm.", "nachm.");
        assert_eq!(
            time(18, 0, 0, 0).format_with_language(&german, "hh aa"),
            "06 nachm."
        );
        assert_eq!(time(6, 0, 0, 0).format_with_language(&german, "a"), "v");
    }

    #[test]
    fn test_format_fraction_fields() {
        let t = time(0, 0, 0, 987);
        assert_eq!(t.format("f"), ".9");
        assert_eq!(t.format("ff"), ".98");
        assert_eq!(t.format("fff"), ".987");
        assert_eq!(t.format("ffff"), ".987");
        assert_eq!(time(0, 0, 0, 5).format("ss ff"), "00 .00");
        assert_eq!(time(0, 0, 0, 5).format("fff"), ".005");
    }

    #[test]
    fn test_format_literal_passthrough() {
        assert_eq!(time(7, 0, 0, 0).format("[HH] 'at' x"), "[07] at x");
        assert_eq!(time(7, 0, 0, 0).format(""), "");
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.marker(11), "am.");
        assert_eq!(Language::ENGLISH.marker(12), "pm.");
    }
}
