use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult},
        utils::{count_arg_or, function_arg, list_arg},
    },
    value::core::Value,
};

/// Replaces elements of `items` with `f(element)`, descending into nested
/// lists while `level` allows.
///
/// At each level, a list element is descended into when the remaining level
/// is positive; any other element is replaced by `f(element)`. With
/// `level == 1` nested lists are therefore left as they are, and
/// `level == 0` does nothing.
///
/// `items` is only updated once every call to `f` has succeeded, so on error
/// it is left untouched.
///
/// # Errors
/// The first error returned by `f`.
///
/// # Example
/// ```
/// use listkit::interpreter::{
///     evaluator::{core::EvalResult, function::map::map_in_place},
///     value::core::Value,
/// };
///
/// let mut items = vec![Value::Integer(1), vec![2.into(), 3.into()].into()];
/// let mut double = |v: Value| -> EvalResult<Value> { Ok(Value::Integer(v.as_integer()? * 2)) };
///
/// map_in_place(&mut double, &mut items, 1).unwrap();
/// assert_eq!(Value::from(items.clone()).to_string(), "{2, {2, 3}}");
///
/// map_in_place(&mut double, &mut items, 2).unwrap();
/// assert_eq!(Value::from(items).to_string(), "{4, {4, 6}}");
/// ```
pub fn map_in_place<F>(f: &mut F, items: &mut Vec<Value>, level: usize) -> EvalResult<()>
    where F: FnMut(Value) -> EvalResult<Value>
{
    if level == 0 {
        return Ok(());
    }

    let mut mapped = items.clone();
    map_level(f, &mut mapped, level)?;
    *items = mapped;
    Ok(())
}

fn map_level<F>(f: &mut F, items: &mut [Value], level: usize) -> EvalResult<()>
    where F: FnMut(Value) -> EvalResult<Value>
{
    if level == 0 {
        return Ok(());
    }
    for item in items.iter_mut() {
        match item {
            Value::List(inner) => map_level(f, inner, level - 1)?,
            _ => *item = f(item.clone())?,
        }
    }
    Ok(())
}

/// `Map[f, t]` or `Map[f, t, level]`, where `f` names a builtin.
pub(crate) fn map_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let name = function_arg(args, 0)?;
    let mut items = list_arg(args, 1)?.to_vec();
    let level = count_arg_or(args, 2, 1, "Map level")?;

    map_in_place(&mut |v| context.call(name, &[v]), &mut items, level)?;
    Ok(Value::List(items))
}
