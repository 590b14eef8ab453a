use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::list_arg,
    },
    value::{core::Value, index::IndexSpec},
};

/// Returns a copy of `items` without the positions selected by `spec`.
///
/// Positions are 1-based. Positions of `spec` that fall outside the sequence
/// are ignored rather than reported, so dropping more elements than exist
/// simply yields an empty sequence.
///
/// | spec | removes |
/// |---|---|
/// | `Count(n)`, `n > 0` | the first `n` |
/// | `Count(n)`, `n < 0` | the last `abs(n)` |
/// | `Single(n)` | position `n` |
/// | `Span(m, n)` | positions `m..=n` |
/// | `Stride(m, n, s)` | positions `m, m + s, ...` up to `n` |
///
/// # Example
/// ```
/// use listkit::interpreter::{evaluator::function::drop::drop_positions, value::index::IndexSpec};
///
/// let t = [1, 2, 3, 4, 5, 6];
///
/// assert_eq!(drop_positions(&t, IndexSpec::Count(2)), vec![3, 4, 5, 6]);
/// assert_eq!(drop_positions(&t, IndexSpec::Count(-2)), vec![1, 2, 3, 4]);
/// assert_eq!(drop_positions(&t, IndexSpec::Single(3)), vec![1, 2, 4, 5, 6]);
/// assert_eq!(drop_positions(&t, IndexSpec::Span(2, 4)), vec![1, 5, 6]);
/// assert_eq!(drop_positions(&t, IndexSpec::Stride(1, 6, 2)), vec![2, 4, 6]);
/// assert_eq!(drop_positions(&t, IndexSpec::Count(10)), Vec::<i32>::new());
/// ```
#[must_use]
pub fn drop_positions<T: Clone>(items: &[T], spec: IndexSpec) -> Vec<T> {
    let len = i64::try_from(items.len()).unwrap_or(i64::MAX);

    items.iter()
         .zip(1_i64..)
         .filter(|(_, position)| !spec.selects(*position, len))
         .map(|(item, _)| item.clone())
         .collect()
}

/// `Drop[t, n]`, `Drop[t, {n}]`, `Drop[t, {m, n}]` or `Drop[t, {m, n, s}]`.
pub(crate) fn drop_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let items = list_arg(args, 0)?;
    let spec = IndexSpec::try_from(&args[1])?;

    Ok(Value::List(drop_positions(items, spec)))
}
