// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for compiling date/time format patterns and interpreting
//! partially or fully typed input against them.
//!
//! A pattern such as `"yyyy-MM-dd HH:mm:ss"` is compiled once into a
//! [`TokenSequence`] and then reused:
//!
//! * [`parse`] turns an input string into a [`ParseResult`], which either holds
//!   a date-time or tells which separator the input is still missing,
//! * [`format`] renders a date-time with the same layout,
//! * [`punctuate`] appends a pending separator, which is what an input mask
//!   does while the user types digits.
//!
//! The recognised identifiers are `yyyy`, `MM`, `dd`, `HH`, `mm` and `ss`.
//! Every other character of a pattern is literal text.
//!
//! ```
//! use datetime_mask::{compile, format, parse};
//!
//! let tokens = compile("dd/MM/yyyy");
//! let date = parse("29/02/2024", &tokens).date.unwrap();
//! assert_eq!(format(&date, &tokens), "29/02/2024");
//!
//! // 2023 is not a leap year
//! assert!(parse("29/02/2023", &tokens).date.is_none());
//!
//! // the user typed the day, the mask should insert the slash
//! assert_eq!(parse("29", &tokens).missing_punctuation, "/");
//! ```

#[macro_use]
mod logging;

mod calendar;
mod compile;
mod error;
mod field;
mod format;
mod interpret;
mod mask;
mod token;

pub use calendar::{days_in_month, is_leap_year};
pub use compile::compile;
pub use error::Failure;
pub use field::FieldKind;
pub use format::format;
pub use interpret::{default_baseline, parse, parse_with_baseline, ParseResult};
pub use mask::{punctuate, punctuate_with_baseline};
pub use token::{Token, TokenSequence};

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Timelike};

    use crate::{compile, days_in_month, format, parse};

    #[test]
    fn test_readme_code() {
        let tokens = compile("yyyy-MM-dd HH:mm:ss");
        let date = parse("2021-02-14 06:37:47", &tokens).date.unwrap();
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2021, 2, 14)
                .unwrap()
                .and_hms_opt(6, 37, 47)
                .unwrap()
        );
    }

    #[test]
    fn format_then_parse_every_day_of_a_leap_year() {
        let tokens = compile("yyyy-MM-dd");
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        while date.year() == 2024 {
            let text = format(&date, &tokens);
            assert_eq!(parse(&text, &tokens).date, Some(date), "{text}");
            date += chrono::Duration::days(1);
        }
    }

    #[test]
    fn format_then_parse_times() {
        let tokens = compile("HH:mm:ss");
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        for hour in 0..24 {
            for minute in [0, 1, 29, 59] {
                for second in [0, 30, 59] {
                    let date = base.and_hms_opt(hour, minute, second).unwrap();
                    let parsed = parse(&format(&date, &tokens), &tokens).date.unwrap();
                    assert_eq!(
                        (parsed.hour(), parsed.minute(), parsed.second()),
                        (hour, minute, second)
                    );
                }
            }
        }
    }

    #[test]
    fn days_in_month_agrees_with_parse() {
        let tokens = compile("yyyyMMdd");
        for month in 1..=12 {
            let last = days_in_month(2023, month - 1);
            let last_day = format!("2023{month:02}{last:02}");
            let past_end = format!("2023{month:02}{:02}", last + 1);
            assert!(parse(&last_day, &tokens).date.is_some());
            assert!(parse(&past_end, &tokens).date.is_none());
        }
    }
}
