/// Reader errors.
///
/// Defines the errors raised while lexing and parsing an expression such as
/// `Drop[{1, 2, 3}, 1]`: unknown characters, unbalanced brackets and
/// oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error a builtin can report: wrong argument types or counts,
/// degenerate numeric input such as a zero divisor or a non-progressing step,
/// mismatched sequence lengths, and failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
