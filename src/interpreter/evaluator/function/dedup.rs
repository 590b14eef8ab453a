use std::collections::HashSet;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::list_arg,
    },
    value::{core::Value, key::ValueKey},
};

/// Returns `items` with every repeated value removed, keeping first
/// occurrences in their original order.
///
/// Values compare structurally, so `1` and `1.0` are distinct.
///
/// # Example
/// ```
/// use listkit::interpreter::{evaluator::function::dedup::delete_duplicates, value::core::Value};
///
/// let items = [Value::Integer(3), 1.into(), 3.into(), Value::Real(1.0), 1.into()];
/// assert_eq!(Value::from(delete_duplicates(&items)).to_string(), "{3, 1, 1.0}");
/// ```
#[must_use]
pub fn delete_duplicates(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter()
         .filter(|item| seen.insert(ValueKey::from(*item)))
         .cloned()
         .collect()
}

/// `DeleteDuplicates[t]`.
pub(crate) fn delete_duplicates_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    Ok(Value::List(delete_duplicates(list_arg(args, 0)?)))
}
