use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::is_builtin},
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

/// Builds an `InvalidArgument` error from a message.
pub fn invalid(details: impl Into<String>) -> RuntimeError {
    RuntimeError::InvalidArgument { details: details.into() }
}

/// Builds the error for a builtin handed an argument count it does not
/// accept.
pub fn arity_mismatch(name: &str, args: &[Value]) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                          found: args.len(), }
}

/// Reads the optional integer argument at `index`, falling back to `default`
/// when the caller did not supply it.
///
/// # Errors
/// Returns the conversion error if the argument is present but not an
/// integer.
pub fn integer_arg_or(args: &[Value], index: usize, default: i64) -> EvalResult<i64> {
    args.get(index).map_or(Ok(default), Value::as_integer)
}

/// Reads the optional non-negative count at `index`.
///
/// `what` names the argument in the error message, as in
/// `"Shuffle pass count must be non-negative, found -1"`.
///
/// # Errors
/// - The conversion error if the argument is not an integer.
/// - `InvalidArgument` if the integer is negative.
pub fn count_arg_or(args: &[Value], index: usize, default: usize, what: &str) -> EvalResult<usize> {
    let Some(value) = args.get(index) else {
        return Ok(default);
    };
    let n = value.as_integer()?;
    if n < 0 {
        return Err(invalid(format!("{what} must be non-negative, found {n}")));
    }
    i64_to_usize_checked(n)
}

/// Borrows the list argument at `index`.
///
/// # Errors
/// - `ExpectedList` if the argument is not a list.
/// - `InvalidArgument` if the argument is missing.
pub fn list_arg(args: &[Value], index: usize) -> EvalResult<&[Value]> {
    args.get(index)
        .ok_or_else(|| invalid(format!("missing argument {}", index + 1)))?
        .as_list()
}

/// Reads the builtin name passed as a function argument at `index`.
///
/// The name is checked up front so that an unknown function is reported even
/// when it would never be called, as in `Table[Foo, 0]`.
///
/// # Errors
/// - `ExpectedFunction` if the argument is not a symbol.
/// - `UnknownFunction` if no builtin has that name.
pub fn function_arg(args: &[Value], index: usize) -> EvalResult<&str> {
    let name = args.get(index)
                   .ok_or_else(|| invalid(format!("missing argument {}", index + 1)))?
                   .as_symbol()?;
    if !is_builtin(name) {
        return Err(RuntimeError::UnknownFunction { name: name.to_string() });
    }
    Ok(name)
}
