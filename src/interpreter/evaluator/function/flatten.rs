use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::{count_arg_or, list_arg},
    },
    value::core::Value,
};

/// Splices nested lists into a new flat sequence, descending at most `level`
/// levels.
///
/// Elements are emitted in depth-first, left-to-right order. A nested list
/// met once the level budget is spent is emitted whole, so `level == 0`
/// returns a copy of `items`.
///
/// # Example
/// ```
/// use listkit::interpreter::{evaluator::function::flatten::flatten, value::core::Value};
///
/// let nested = Value::from(vec![1.into(),
///                               vec![2.into(), vec![3.into()].into()].into(),
///                               4.into()]);
/// let items = nested.as_list().unwrap();
///
/// assert_eq!(Value::from(flatten(items, 1)).to_string(), "{1, 2, {3}, 4}");
/// assert_eq!(Value::from(flatten(items, 2)).to_string(), "{1, 2, 3, 4}");
/// assert_eq!(Value::from(flatten(items, 0)), nested);
/// ```
#[must_use]
pub fn flatten(items: &[Value], level: usize) -> Vec<Value> {
    let mut flat = Vec::with_capacity(items.len());
    flatten_into(items, level, &mut flat);
    flat
}

fn flatten_into(items: &[Value], level: usize, flat: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::List(inner) if level > 0 => flatten_into(inner, level - 1, flat),
            _ => flat.push(item.clone()),
        }
    }
}

/// `Flatten[t]` or `Flatten[t, level]`.
pub(crate) fn flatten_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let items = list_arg(args, 0)?;
    let level = count_arg_or(args, 1, 1, "Flatten level")?;

    Ok(Value::List(flatten(items, level)))
}
