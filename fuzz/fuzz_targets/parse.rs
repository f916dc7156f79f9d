#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let (pattern, input) = s.split_once('\n').unwrap_or((s, s));

    let tokens = datetime_mask::compile(pattern);
    assert_eq!(tokens.to_string(), pattern);

    let result = datetime_mask::parse(input, &tokens);
    if let Some(date) = result.date {
        assert!(result.missing_punctuation.is_empty());
        // formatting a parsed date must parse back to the same date
        let text = datetime_mask::format(&date, &tokens);
        assert_eq!(datetime_mask::parse(&text, &tokens).date, Some(date));
    }

    // any in-range date survives a format/parse round trip
    if let [y0, y1, mo, d, h, mi, sec, ..] = data {
        let year = i32::from(u16::from_le_bytes([*y0, *y1]) % 10_000);
        let month = u32::from(*mo % 12) + 1;
        let day = u32::from(*d % 31) + 1;
        let hour = u32::from(*h % 24);
        let minute = u32::from(*mi % 60);
        let second = u32::from(*sec % 60);
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second));
        if let Some(date) = date {
            let tokens = datetime_mask::compile("yyyy-MM-dd HH:mm:ss");
            let text = datetime_mask::format(&date, &tokens);
            assert_eq!(datetime_mask::parse(&text, &tokens).date, Some(date));
        }
    }
});
