// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::field::FieldKind;
use crate::{compile, format, parse, parse_with_baseline, ParseResult};

/// A compiled unit of a format pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text that must appear verbatim in the input.
    Literal(String),
    Field(FieldKind),
}

/// The compiled form of a pattern.
///
/// Compile once with [`compile`] and reuse it for every parse and format
/// call. Equal patterns compile to equal sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shorthand for [`parse`](crate::parse).
    pub fn parse(&self, input: &str) -> ParseResult {
        parse(input, self)
    }

    /// Shorthand for [`parse_with_baseline`](crate::parse_with_baseline).
    pub fn parse_with_baseline(&self, input: &str, baseline: NaiveDateTime) -> ParseResult {
        parse_with_baseline(input, self, baseline)
    }

    /// Shorthand for [`format`](crate::format).
    pub fn format(&self, date: &NaiveDateTime) -> String {
        format(date, self)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders the sequence back into pattern text.
impl Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            match token {
                Token::Literal(text) => write!(f, "{text}")?,
                Token::Field(kind) => write!(f, "{}", kind.identifier())?,
            }
        }
        Ok(())
    }
}

impl FromStr for TokenSequence {
    type Err = Infallible;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Ok(compile(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::{Token, TokenSequence};
    use crate::field::FieldKind;

    #[test]
    fn display_round_trips_pattern() {
        for pattern in ["yyyy-MM-dd", "dd/MM/yyyy HH:mm:ss", "", "at HH", "yyyyMMdd"] {
            let tokens: TokenSequence = pattern.parse().unwrap();
            assert_eq!(tokens.to_string(), pattern);
        }
    }

    #[test]
    fn accessors() {
        let tokens: TokenSequence = "HH:mm".parse().unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(!tokens.is_empty());
        assert_eq!(tokens.iter().next(), Some(&Token::Field(FieldKind::Hour)));
        assert!(TokenSequence::default().is_empty());
    }
}
