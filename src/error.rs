// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::error::Error;
use std::fmt::{self, Display};

use crate::field::FieldKind;

/// Why an input did not produce a date.
///
/// Only [`Failure::PunctuationPending`] is recoverable without deleting typed
/// characters: appending the missing text makes the input match again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The input has a different character where a literal was expected.
    LiteralMismatch { expected: char, found: char },
    /// The input ended right where a literal was expected.
    PunctuationPending { missing: String },
    /// Too few digits, or non-digits, where a field was expected.
    FieldFormat(FieldKind),
    /// The digits of a field are outside its range, e.g. month 13.
    FieldRange { field: FieldKind, value: u32 },
    /// Each field is in range but the day does not exist in that month.
    DayOverflow { day: u32, days_in_month: u32 },
    /// The fields were accepted but cannot be combined into a date-time.
    Unrepresentable,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::LiteralMismatch { expected, found } => {
                write!(f, "expected {expected:?}, found {found:?}")
            }
            Failure::PunctuationPending { missing } => {
                write!(f, "input ends before {missing:?}")
            }
            Failure::FieldFormat(field) => {
                write!(f, "expected {} digits for the {field}", field.width())
            }
            Failure::FieldRange { field, value } => {
                let range = field.range();
                write!(
                    f,
                    "{field} {value} is out of range {}..={}",
                    range.start(),
                    range.end()
                )
            }
            Failure::DayOverflow { day, days_in_month } => {
                write!(f, "day {day} exceeds the {days_in_month} days of the month")
            }
            Failure::Unrepresentable => {
                write!(f, "the fields do not form a valid date and time")
            }
        }
    }
}

impl Error for Failure {}

#[cfg(test)]
mod tests {
    use super::Failure;
    use crate::field::FieldKind;

    #[test]
    fn messages() {
        assert_eq!(
            Failure::FieldRange {
                field: FieldKind::Month,
                value: 13
            }
            .to_string(),
            "month 13 is out of range 1..=12"
        );
        assert_eq!(
            Failure::FieldFormat(FieldKind::Year).to_string(),
            "expected 4 digits for the year"
        );
        assert_eq!(
            Failure::PunctuationPending {
                missing: "-".to_owned()
            }
            .to_string(),
            "input ends before \"-\""
        );
        assert_eq!(
            Failure::LiteralMismatch {
                expected: '-',
                found: '/'
            }
            .to_string(),
            "expected '-', found '/'"
        );
    }
}
