// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use chrono::NaiveDateTime;
use datetime_mask::{compile, parse_with_baseline};

pub const FMT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub fn baseline(text: &str) -> NaiveDateTime {
    match NaiveDateTime::parse_from_str(text, FMT) {
        Ok(v) => v,
        Err(e) => panic!("Invalid baseline '{text}': {e}"),
    }
}

pub fn check_date(pattern: &str, input: &str, base: &str, expected: &str) {
    let tokens = compile(pattern);
    let result = parse_with_baseline(input, &tokens, baseline(base));

    let date = match result.date {
        Some(v) => v,
        None => panic!(
            "Failed to parse '{input}' with '{pattern}': {:?}",
            result.failure
        ),
    };

    assert_eq!(
        date.format(FMT).to_string(),
        expected,
        "Input value: {input}"
    );
    assert_eq!(result.missing_punctuation, "", "Input value: {input}");
}

pub fn check_rejected(pattern: &str, input: &str, missing: &str) {
    let tokens = compile(pattern);
    let result = parse_with_baseline(input, &tokens, baseline("2020-01-01 00:00:00.000"));

    assert_eq!(result.date, None, "Input value: {input}");
    assert_eq!(result.missing_punctuation, missing, "Input value: {input}");
}
