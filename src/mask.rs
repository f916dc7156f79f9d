// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Separator auto-insertion for interactive input masks.
//!
//! A mask calls [`punctuate`] after every keystroke. Whenever everything typed
//! so far is correct up to a separator, the separator is appended so that the
//! user only has to type digits.

use chrono::NaiveDateTime;

use crate::interpret::{default_baseline, parse_with_baseline};
use crate::token::TokenSequence;

/// Returns `input` with the pending punctuation appended, or `None` when the
/// input does not end right before a separator.
///
/// # Examples
///
/// ```
/// use datetime_mask::{compile, punctuate};
///
/// let tokens = compile("dd/MM/yyyy");
/// assert_eq!(punctuate("14", &tokens).as_deref(), Some("14/"));
/// assert_eq!(punctuate("14/1", &tokens), None);
/// ```
pub fn punctuate(input: &str, tokens: &TokenSequence) -> Option<String> {
    punctuate_with_baseline(input, tokens, default_baseline())
}

/// Like [`punctuate`], with an explicit baseline for the fields the pattern
/// does not mention.
pub fn punctuate_with_baseline(
    input: &str,
    tokens: &TokenSequence,
    baseline: NaiveDateTime,
) -> Option<String> {
    let result = parse_with_baseline(input, tokens, baseline);
    if !result.is_pending() {
        return None;
    }
    trace!("appending {:?} to {input:?}", result.missing_punctuation);
    Some(format!("{input}{}", result.missing_punctuation))
}

#[cfg(test)]
mod tests {
    use super::punctuate;
    use crate::compile;

    #[test]
    fn typing_a_date() {
        let tokens = compile("yyyy-MM-dd HH:mm");
        let mut typed = String::new();
        for c in "202306151230".chars() {
            typed.push(c);
            if let Some(completed) = punctuate(&typed, &tokens) {
                typed = completed;
            }
        }
        assert_eq!(typed, "2023-06-15 12:30");
        assert!(tokens.parse(&typed).date.is_some());
    }

    #[test]
    fn nothing_to_insert() {
        let tokens = compile("yyyy-MM-dd");
        assert_eq!(punctuate("", &tokens), None);
        assert_eq!(punctuate("20", &tokens), None);
        assert_eq!(punctuate("2023-", &tokens), None);
        assert_eq!(punctuate("2023-06-15", &tokens), None);
        // out of range month: no separator offered
        assert_eq!(punctuate("2023-13", &tokens), None);
    }

    #[test]
    fn multi_character_separator() {
        let tokens = compile("HH h mm");
        assert_eq!(punctuate("09", &tokens).as_deref(), Some("09 h "));
        assert_eq!(punctuate("09 ", &tokens).as_deref(), Some("09 h "));
    }
}
