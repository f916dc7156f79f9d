// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::field::FieldKind;
use crate::token::{Token, TokenSequence};

/// Render `date` with the layout described by `tokens`.
///
/// Literals are copied verbatim and every field is written as a zero-padded
/// decimal of the field's width. This is the inverse of
/// [`parse`](crate::parse) for dates within the field ranges.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datetime_mask::{compile, format};
///
/// let date = NaiveDate::from_ymd_opt(987, 6, 5)
///     .unwrap()
///     .and_hms_opt(4, 3, 2)
///     .unwrap();
/// assert_eq!(format(&date, &compile("dd.MM.yyyy HH:mm:ss")), "05.06.0987 04:03:02");
/// ```
pub fn format(date: &NaiveDateTime, tokens: &TokenSequence) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Field(kind) => {
                let value = field_value(date, *kind);
                out.push_str(&format!("{value:0width$}", width = kind.width()));
            }
        }
    }
    out
}

fn field_value(date: &NaiveDateTime, kind: FieldKind) -> i64 {
    match kind {
        FieldKind::Year => i64::from(date.year()),
        FieldKind::Month => i64::from(date.month()),
        FieldKind::Day => i64::from(date.day()),
        FieldKind::Hour => i64::from(date.hour()),
        FieldKind::Minute => i64::from(date.minute()),
        FieldKind::Second => i64::from(date.second()),
    }
}
