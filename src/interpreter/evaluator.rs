/// Evaluation context and expression evaluation.
///
/// Defines `Context`, which owns the random generator, and `EvalResult`.
pub mod core;

/// Builtin functions.
///
/// The builtin table and one module per family of list and number-theory
/// builtins.
pub mod function;

/// Argument helpers shared by the builtins.
pub mod utils;
