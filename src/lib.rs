//! # listkit
//!
//! listkit is a toolkit of list and number-theory builtins modeled on the
//! standard library of a symbolic-computation language: `Range`, `Table`,
//! `Subdivide`, `CharacterRange`, `Drop`, `Flatten`, `Partition`, `Riffle`,
//! `Shuffle`, `RandomChoice`, `RandomReal`, `RandomInteger`, `Map`,
//! `DeleteDuplicates`, `GCD` and `EulerPhi`.
//!
//! Every builtin is available as a typed Rust function under
//! [`interpreter::evaluator::function`], through the name-keyed registry
//! ([`interpreter::evaluator::core::Context::call`]), and from text via
//! [`evaluate`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Context,
    lexer::tokenize,
    parser::core::parse_program,
    value::core::Value,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum produced by the reader: literals,
/// list literals, bare symbols and builtin calls, each tagged with the byte
/// offset it was read from.
pub mod ast;
/// Provides the error types for reading and evaluation.
///
/// # Responsibilities
/// - `ParseError` for malformed input text.
/// - `RuntimeError` for every failure a builtin can report.
pub mod error;
/// Reads, evaluates and dispatches builtin calls.
///
/// # Responsibilities
/// - Tokenizes and parses input text.
/// - Owns the evaluation context and the random generator.
/// - Implements every builtin.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Conversions between `i64`, `usize`, `u32`, and `f64` that never lose data
/// silently.
pub mod util;

/// Evaluates every expression in `source` and returns their values in order.
///
/// Expressions are separated by whitespace, typically one per line. All of
/// them share `context`, so randomized builtins advance the same generator.
///
/// # Errors
/// Returns the first parse error, or the first runtime error raised by a
/// builtin. No values are returned once an error occurs.
///
/// # Examples
/// ```
/// use listkit::{evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::with_seed(0);
///
/// let values = evaluate("Partition[Range[5], 2]\nGCD[12, 18, 30]", &mut context).unwrap();
/// assert_eq!(values[0].to_string(), "{{1, 2}, {3, 4}, {5}}");
/// assert_eq!(values[1].to_string(), "6");
///
/// // Unknown builtins are reported, not ignored.
/// assert!(evaluate("Reverse[{1, 2}]", &mut context).is_err());
/// ```
pub fn evaluate(source: &str, context: &mut Context) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut values = Vec::with_capacity(program.len());
    for expr in &program {
        values.push(context.eval(expr)?);
    }
    Ok(values)
}
