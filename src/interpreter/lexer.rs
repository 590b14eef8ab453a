use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression such as `Drop[{1, 2}, -1]`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real literals such as `3.14`, `-2.`, or `2.1e-10`.
    #[regex(r"-?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"-?[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literals such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// `True` or `False`.
    #[token("True", |_| Some(true))]
    #[token("False", |_| Some(false))]
    Bool(bool),
    /// Double-quoted strings without escapes, such as `"a"`.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// Builtin names and other symbols such as `Map` or `EulerPhi`.
    #[regex(r"[A-Za-z$][A-Za-z0-9$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(* comments *)`
    #[regex(r"\(\*([^*]|\*+[^*)])*\*+\)", logos::skip)]
    Comment,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// - `LiteralTooLarge` for an integer literal outside the `i64` range.
/// - `InvalidToken` for anything the lexer does not recognise.
///
/// # Example
/// ```
/// use listkit::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("GCD[4, -6]").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("GCD".into()), 0),
///                 (Token::LBracket, 3),
///                 (Token::Integer(4), 4),
///                 (Token::Comma, 5),
///                 (Token::Integer(-6), 7),
///                 (Token::RBracket, 9)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(()) => {
                let text = lexer.slice().to_string();
                let digits = text.strip_prefix('-').unwrap_or(&text);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { text, offset });
                }
                return Err(ParseError::InvalidToken { text, offset });
            },
        }
    }

    Ok(tokens)
}
