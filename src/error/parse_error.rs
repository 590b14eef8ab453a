#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while reading an expression.
pub enum ParseError {
    /// Found a character sequence the lexer does not recognise.
    InvalidToken {
        /// The offending slice of source text.
        text:   String,
        /// Byte offset of the slice.
        offset: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was expected and what was found.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// An integer literal does not fit into 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        text:   String,
        /// Byte offset of the literal.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { text, offset } => {
                write!(f, "Error at offset {offset}: Invalid token '{text}'.")
            },
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::LiteralTooLarge { text, offset } => {
                write!(f, "Error at offset {offset}: Literal {text} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
