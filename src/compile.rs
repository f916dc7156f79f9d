// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Compile a format pattern into a [`TokenSequence`].
//!
//! A pattern is plain text in which the identifiers `yyyy`, `MM`, `dd`, `HH`,
//! `mm` and `ss` stand for the year, month, day, hour, minute and second.
//! Everything else is literal text the input has to repeat verbatim. There is
//! no escaping and no invalid pattern: characters that are not part of an
//! identifier simply become literals, so `"yyyy.MM.dd"` and `"Year: yyyy"` are
//! both fine, and so is a typo like `"YYYY-MM-dd"` (which expects a literal
//! `YYYY` in the input).

use winnow::{
    combinator::{alt, repeat, trace},
    token::any,
    ModalResult, Parser,
};

use crate::field::FieldKind;
use crate::token::{Token, TokenSequence};

/// Compile `pattern` into a reusable token sequence.
///
/// Field identifiers are probed in the order of [`FieldKind::ALL`]. Runs of
/// adjacent literal characters are merged into a single [`Token::Literal`].
///
/// # Examples
///
/// ```
/// use datetime_mask::{compile, FieldKind, Token};
///
/// let tokens = compile("yyyy-MM");
/// assert_eq!(
///     tokens.tokens(),
///     [
///         Token::Field(FieldKind::Year),
///         Token::Literal("-".to_owned()),
///         Token::Field(FieldKind::Month),
///     ]
/// );
/// ```
pub fn compile(pattern: &str) -> TokenSequence {
    let mut input = pattern;
    // `sequence` accepts any character, so it cannot fail and always consumes
    // the whole pattern.
    let tokens = sequence.parse_next(&mut input).unwrap_or_default();
    debug!("compiled {pattern:?} into {} tokens", tokens.len());
    TokenSequence::new(tokens)
}

fn sequence(input: &mut &str) -> ModalResult<Vec<Token>> {
    trace(
        "sequence",
        repeat(0.., alt((field.map(Piece::Field), any.map(Piece::Char)))).fold(
            Vec::new,
            |mut tokens: Vec<Token>, piece| {
                match piece {
                    Piece::Field(kind) => tokens.push(Token::Field(kind)),
                    Piece::Char(c) => match tokens.last_mut() {
                        Some(Token::Literal(text)) => text.push(c),
                        _ => tokens.push(Token::Literal(c.to_string())),
                    },
                }
                tokens
            },
        ),
    )
    .parse_next(input)
}

enum Piece {
    Field(FieldKind),
    Char(char),
}

/// Parse one field identifier. The alternatives follow [`FieldKind::ALL`].
fn field(input: &mut &str) -> ModalResult<FieldKind> {
    trace(
        "field",
        alt((
            FieldKind::Year.identifier().value(FieldKind::Year),
            FieldKind::Month.identifier().value(FieldKind::Month),
            FieldKind::Day.identifier().value(FieldKind::Day),
            FieldKind::Hour.identifier().value(FieldKind::Hour),
            FieldKind::Minute.identifier().value(FieldKind::Minute),
            FieldKind::Second.identifier().value(FieldKind::Second),
        )),
    )
    .parse_next(input)
}
