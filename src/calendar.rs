// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Month lengths in the proleptic Gregorian calendar.

/// Returns true when February of `year` has 29 days.
///
/// A year is a leap year when it is divisible by 4, except for years divisible
/// by 100 that are not also divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month. `month0` is zero-based, so `0` is
/// January and `11` is December. Months outside that range have no days.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 0,
    }
}
