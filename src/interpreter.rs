/// The evaluator module runs expressions and hosts the builtins.
///
/// It owns the evaluation context (and with it the random generator), the
/// builtin registry, and every list and number-theory builtin.
///
/// # Responsibilities
/// - Evaluates parsed expressions, innermost call first.
/// - Dispatches calls by name with arity checks.
/// - Reports builtin failures as `RuntimeError`s.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// Produces integers, reals, strings, booleans, identifiers and the bracket
/// and comma punctuation, each with its byte offset.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// Understands literals, `{...}` lists, bare symbols and `Name[...]` calls.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Declares `Value`, the `Drop` index specification and the hashable value key
/// used for duplicate detection.
pub mod value;
