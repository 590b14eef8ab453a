use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::{invalid, list_arg},
    },
    value::core::Value,
};

/// Interleaves `second` between consecutive elements of `first`.
///
/// `second` is cycled when it is shorter than needed. The result always starts
/// and ends with an element of `first`, so it holds `2 * first.len() - 1`
/// elements; an empty `first` gives an empty result.
///
/// # Errors
/// `InvalidArgument` if `second` is empty.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::riffle::riffle;
///
/// assert_eq!(riffle(&[1, 2, 3], &[10]).unwrap(), vec![1, 10, 2, 10, 3]);
/// assert_eq!(riffle(&[1, 2, 3], &[10, 20]).unwrap(), vec![1, 10, 2, 20, 3]);
/// assert!(riffle(&[1, 2, 3], &[]).is_err());
/// ```
pub fn riffle<T: Clone>(first: &[T], second: &[T]) -> EvalResult<Vec<T>> {
    if second.is_empty() {
        return Err(invalid("cannot riffle with an empty list"));
    }

    let mut riffled = Vec::with_capacity((2 * first.len()).saturating_sub(1));
    for (i, item) in first.iter().enumerate() {
        if i > 0 {
            riffled.push(second[(i - 1) % second.len()].clone());
        }
        riffled.push(item.clone());
    }
    Ok(riffled)
}

/// `Riffle[t1, t2]`.
pub(crate) fn riffle_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    Ok(Value::List(riffle(list_arg(args, 0)?, list_arg(args, 1)?)?))
}
