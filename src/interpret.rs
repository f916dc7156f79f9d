// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Interpret an input string against a compiled [`TokenSequence`].
//!
//! The interpreter walks the tokens once, left to right, and stops at the
//! first token the input does not satisfy. Fields that the pattern does not
//! mention keep the value they have in the baseline date-time.
//!
//! When the input runs out exactly where a literal was expected, the part of
//! the literal that is still missing is reported in
//! [`ParseResult::missing_punctuation`]. This is what an input mask needs to
//! insert separators while the user only types digits: after `2023` has been
//! typed against `yyyy-MM-dd`, the result asks for `-`.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;

use crate::calendar::days_in_month;
use crate::error::Failure;
use crate::field::FieldKind;
use crate::token::{Token, TokenSequence};

/// The outcome of interpreting one input string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    /// The date-time, present only when every token matched, every field was
    /// in range and the day exists in the resulting month.
    pub date: Option<NaiveDateTime>,
    /// The unmatched rest of the literal at which the input ended. Empty
    /// unless the input is punctuation-pending.
    pub missing_punctuation: String,
    /// The first failure met. Results returned by [`parse`] always carry one
    /// exactly when `date` is absent.
    pub failure: Option<Failure>,
}

impl ParseResult {
    /// Returns true when appending [`Self::missing_punctuation`] to the input
    /// is all that is needed to continue.
    pub fn is_pending(&self) -> bool {
        !self.missing_punctuation.is_empty()
    }

    /// The date, or the failure that prevented it. A hand-built result with
    /// neither reports [`Failure::Unrepresentable`].
    pub fn into_result(self) -> Result<NaiveDateTime, Failure> {
        match (self.date, self.failure) {
            (Some(date), _) => Ok(date),
            (None, Some(failure)) => Err(failure),
            (None, None) => Err(Failure::Unrepresentable),
        }
    }
}

/// The baseline used by [`parse`]: 2020-01-01 00:00:00.000.
pub fn default_baseline() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_milli_opt(0, 0, 0, 0))
        .expect("2020-01-01 00:00:00.000 is a valid date-time")
}

/// Interpret `input` against `tokens`, filling unmentioned fields from
/// [`default_baseline`].
///
/// # Examples
///
/// ```
/// use datetime_mask::{compile, parse};
///
/// let tokens = compile("yyyy-MM-dd");
///
/// let result = parse("2023-06-15", &tokens);
/// assert_eq!(result.date.unwrap().to_string(), "2023-06-15 00:00:00");
///
/// let result = parse("2023-06", &tokens);
/// assert_eq!(result.date, None);
/// assert_eq!(result.missing_punctuation, "-");
/// ```
pub fn parse(input: &str, tokens: &TokenSequence) -> ParseResult {
    parse_with_baseline(input, tokens, default_baseline())
}

/// Interpret `input` against `tokens`, filling unmentioned fields from
/// `baseline`.
///
/// Input left over after the last token is ignored. Sub-millisecond precision
/// of the baseline is dropped.
pub fn parse_with_baseline(
    input: &str,
    tokens: &TokenSequence,
    baseline: NaiveDateTime,
) -> ParseResult {
    let mut fields = FieldAccumulator::from_baseline(&baseline);
    let mut rest = input;
    let mut failure = None;

    for token in tokens {
        let matched = match token {
            Token::Literal(text) => literal(&mut rest, text),
            Token::Field(kind) => field(&mut rest, *kind).map(|value| fields.set(*kind, value)),
        };
        if let Err(err) = matched {
            trace!("{input:?} stopped at {token:?}: {err}");
            failure = Some(err);
            break;
        }
    }

    // Runs even after a failure. A failure found earlier takes precedence.
    let month_length = days_in_month(fields.year, fields.month0);
    if fields.day > month_length && failure.is_none() {
        trace!(
            "{input:?} has day {} in a {month_length} day month",
            fields.day
        );
        failure = Some(Failure::DayOverflow {
            day: fields.day,
            days_in_month: month_length,
        });
    }

    let outcome = match failure {
        None => fields.build().ok_or(Failure::Unrepresentable),
        Some(failure) => Err(failure),
    };

    let missing_punctuation = match &outcome {
        Err(Failure::PunctuationPending { missing }) => missing.clone(),
        _ => String::new(),
    };

    ParseResult {
        date: outcome.as_ref().ok().copied(),
        missing_punctuation,
        failure: outcome.err(),
    }
}

/// Working state of one interpretation. The month is zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldAccumulator {
    pub(crate) year: i32,
    pub(crate) month0: u32,
    pub(crate) day: u32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) millisecond: u32,
}

impl FieldAccumulator {
    pub(crate) fn from_baseline(baseline: &NaiveDateTime) -> Self {
        Self {
            year: baseline.year(),
            month0: baseline.month0(),
            day: baseline.day(),
            hour: baseline.hour(),
            minute: baseline.minute(),
            second: baseline.second(),
            millisecond: baseline.nanosecond() / 1_000_000,
        }
    }

    fn set(&mut self, kind: FieldKind, value: u32) {
        match kind {
            // the year range keeps this lossless
            FieldKind::Year => self.year = value as i32,
            FieldKind::Month => self.month0 = value - 1,
            FieldKind::Day => self.day = value,
            FieldKind::Hour => self.hour = value,
            FieldKind::Minute => self.minute = value,
            FieldKind::Second => self.second = value,
        }
    }

    pub(crate) fn build(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, self.day)?.and_hms_milli_opt(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
    }
}

/// Consume `text` from the head of `rest`, one character at a time.
fn literal(rest: &mut &str, text: &str) -> Result<(), Failure> {
    for (offset, expected) in text.char_indices() {
        let head: &str = *rest;
        let mut chars = head.chars();
        match chars.next() {
            Some(found) if found == expected => *rest = chars.as_str(),
            Some(found) => return Err(Failure::LiteralMismatch { expected, found }),
            None => {
                return Err(Failure::PunctuationPending {
                    missing: text[offset..].to_owned(),
                })
            }
        }
    }
    Ok(())
}

/// Consume exactly `kind.width()` ASCII digits from the head of `rest` and
/// return their value if it lies in the field's range.
fn field(rest: &mut &str, kind: FieldKind) -> Result<u32, Failure> {
    let haystack: &str = *rest;
    let digits = digit_pattern(kind)
        .find(haystack)
        .ok_or(Failure::FieldFormat(kind))?
        .as_str();
    let value: u32 = digits.parse().map_err(|_| Failure::FieldFormat(kind))?;
    if !kind.range().contains(&value) {
        return Err(Failure::FieldRange { field: kind, value });
    }
    *rest = &haystack[digits.len()..];
    Ok(value)
}

/// The anchored digit pattern of a field, compiled on first use.
fn digit_pattern(kind: FieldKind) -> &'static Regex {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        FieldKind::ALL
            .iter()
            .map(|kind| {
                Regex::new(&format!("^[0-9]{{{}}}", kind.width()))
                    .expect("field digit pattern is a valid regex")
            })
            .collect()
    });
    &patterns[kind.index()]
}
