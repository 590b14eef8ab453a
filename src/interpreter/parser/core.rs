use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{lexer::Token, parser::utils::parse_comma_separated},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one expression.
///
/// Grammar:
/// ```text
///     expression := literal | list | call | symbol
///     list       := "{" (expression ("," expression)*)? "}"
///     call       := identifier "[" (expression ("," expression)*)? "]"
///     symbol     := identifier
/// ```
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot start an expression.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, offset)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let offset = *offset;

    let literal = |value: LiteralValue| Ok(Expr::Literal { value, offset });

    match token {
        Token::Integer(i) => literal(LiteralValue::Integer(*i)),
        Token::Real(r) => literal(LiteralValue::Real(*r)),
        Token::Bool(b) => literal(LiteralValue::Bool(*b)),
        Token::Str(s) => literal(LiteralValue::Str(s.clone())),
        Token::LBrace => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBrace)?;
            Ok(Expr::List { elements, offset })
        },
        Token::Identifier(name) => {
            if let Some((Token::LBracket, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
                Ok(Expr::Call { name: name.clone(),
                                arguments,
                                offset })
            } else {
                Ok(Expr::Symbol { name: name.clone(),
                                  offset })
            }
        },
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?} cannot start an expression"),
                                                 offset }),
    }
}

/// Parses every expression in a token stream.
///
/// Expressions follow each other with only whitespace between them, so a file
/// may hold one expression per line.
///
/// # Example
/// ```
/// use listkit::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("Range[3]\nEulerPhi[9]").unwrap();
/// assert_eq!(parse_program(&tokens).unwrap().len(), 2);
///
/// let tokens = tokenize("Range[3").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Expr>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    while iter.peek().is_some() {
        program.push(parse_expression(&mut iter)?);
    }

    Ok(program)
}
