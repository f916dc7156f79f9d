// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The typed date/time fields a pattern can refer to.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;

/// A date or time field together with the fixed number of digits it occupies
/// in the input and the inclusive range of values it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl FieldKind {
    /// Every field, in the order the compiler probes their identifiers.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Year,
        FieldKind::Month,
        FieldKind::Day,
        FieldKind::Hour,
        FieldKind::Minute,
        FieldKind::Second,
    ];

    /// The case-sensitive identifier that stands for this field in a pattern.
    pub fn identifier(self) -> &'static str {
        match self {
            FieldKind::Year => "yyyy",
            FieldKind::Month => "MM",
            FieldKind::Day => "dd",
            FieldKind::Hour => "HH",
            FieldKind::Minute => "mm",
            FieldKind::Second => "ss",
        }
    }

    /// Number of digits the field occupies, both when parsing and formatting.
    pub fn width(self) -> usize {
        match self {
            FieldKind::Year => 4,
            _ => 2,
        }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            FieldKind::Year => 0..=9999,
            FieldKind::Month => 1..=12,
            FieldKind::Day => 1..=31,
            FieldKind::Hour => 0..=23,
            FieldKind::Minute | FieldKind::Second => 0..=59,
        }
    }

    /// Position of the field in [`FieldKind::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Year => "year",
            FieldKind::Month => "month",
            FieldKind::Day => "day",
            FieldKind::Hour => "hour",
            FieldKind::Minute => "minute",
            FieldKind::Second => "second",
        };
        write!(f, "{name}")
    }
}
