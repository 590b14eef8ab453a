use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated sequence of items until a closing token.
///
/// Shared by list literals (`{...}`) and call arguments (`[...]`). It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the sequence, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty sequence.
///
/// Grammar (simplified): `items := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, offset)) => {
                return Err(ParseError::UnexpectedToken { token:  format!("expected ',' or {closing:?}, found {tok:?}"),
                                                         offset: *offset, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}
