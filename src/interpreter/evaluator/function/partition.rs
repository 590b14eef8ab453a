use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{integer_arg_or, invalid, list_arg},
        },
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

/// Splits `items` into consecutive, non-overlapping groups of `size`.
///
/// The last group holds whatever remains and may be shorter.
///
/// # Errors
/// `InvalidArgument` if `size == 0`.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::partition::partition;
///
/// assert_eq!(partition(&[1, 2, 3, 4, 5], 2).unwrap(),
///            vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(partition(&[1, 2], 0).is_err());
/// ```
pub fn partition<T: Clone>(items: &[T], size: usize) -> EvalResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(invalid("partition size must be at least 1, found 0"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// `Partition[t]` or `Partition[t, n]`.
pub(crate) fn partition_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let items = list_arg(args, 0)?;
    let n = integer_arg_or(args, 1, 1)?;
    if n <= 0 {
        return Err(invalid(format!("partition size must be at least 1, found {n}")));
    }

    let groups = partition(items, i64_to_usize_checked(n)?)?;
    Ok(Value::List(groups.into_iter().map(Value::List).collect()))
}
