use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{arity_mismatch, count_arg_or, function_arg, invalid},
        },
        value::core::Value,
    },
    util::num::{
        f64_to_i64_checked, i64_to_u32_checked, i64_to_usize_checked, usize_to_f64_checked,
    },
};

/// How many units of `f64::EPSILON`, relative to the larger bound, a real
/// point may miss the bound by and still land on it. This lets `Range[0, 0.3,
/// 0.1]` end on `0.3` even though `0.3 / 0.1` rounds below 3.
const BOUND_TOLERANCE_EPSILONS: f64 = 4.0;

/// Compares two numeric values, exactly for integers and as `f64` otherwise.
fn compare(a: &Value, b: &Value) -> EvalResult<Ordering> {
    if let (Value::Integer(x), Value::Integer(y)) = (a, b) {
        return Ok(x.cmp(y));
    }
    let (x, y) = (a.as_real()?, b.as_real()?);
    x.partial_cmp(&y)
     .ok_or_else(|| invalid(format!("cannot compare {a} with {b}")))
}

fn invalid_step(start: &Value, end: &Value, step: &Value) -> RuntimeError {
    RuntimeError::InvalidStep { start: start.to_string(),
                                end:   end.to_string(),
                                step:  step.to_string(), }
}

/// Produces `start, start + step, ...` up to and including `end` when the
/// step lands on it.
///
/// The step must be non-zero and point from `start` toward `end`; when
/// `start == end` the result is `[start]` whatever the step. Elements are
/// computed as `start + k * step` so reals do not accumulate rounding error.
/// All-integer bounds produce integers, anything else produces reals.
fn progression(start: &Value, end: &Value, step: &Value) -> EvalResult<Vec<Value>> {
    if let (Value::Integer(a), Value::Integer(b), Value::Integer(s)) = (start, end, step) {
        let (a, b, s) = (i128::from(*a), i128::from(*b), i128::from(*s));
        let diff = b - a;
        if s == 0 || (diff != 0 && diff.signum() != s.signum()) {
            return Err(invalid_step(start, end, step));
        }
        let count = diff / s + 1;
        return (0..count).map(|k| {
                             i64::try_from(a + k * s).map(Value::Integer)
                                                     .map_err(|_| RuntimeError::Overflow)
                         })
                         .collect();
    }

    let (a, b, s) = (start.as_real()?, end.as_real()?, step.as_real()?);
    if !(a.is_finite() && b.is_finite() && s.is_finite()) {
        return Err(invalid(format!("bounds and step must be finite, found {start}, {end}, {step}")));
    }
    let diff = b - a;
    if s == 0.0 || (diff != 0.0 && diff.signum() != s.signum()) {
        return Err(invalid_step(start, end, step));
    }
    let mut count = i64_to_usize_checked(f64_to_i64_checked((diff / s).floor())?)?;
    let tolerance = BOUND_TOLERANCE_EPSILONS * f64::EPSILON * a.abs().max(b.abs());
    if (usize_to_f64_checked(count + 1)?.mul_add(s, a) - b).abs() <= tolerance {
        count += 1;
    }

    // No point may pass `end`; one that rounds past it is pinned to it.
    (0..=count).map(|k| {
                   let point = usize_to_f64_checked(k)?.mul_add(s, a);
                   Ok(Value::Real(if (point - b) * s.signum() > 0.0 { b } else { point }))
               })
               .collect()
}

/// Builds the sequence `imin, imin + di, ...` while elements stay `<= imax`.
///
/// An empty sequence is returned when `imin > imax`. A step that is not
/// positive while `imin <= imax` is rejected instead of looping forever.
///
/// # Errors
/// - `InvalidStep` if `di <= 0` and `imin <= imax`.
/// - `ExpectedNumber` if an argument is not numeric.
///
/// # Example
/// ```
/// use listkit::interpreter::{evaluator::function::construct::range, value::core::Value};
///
/// let r = range(&1.into(), &10.into(), &3.into()).unwrap();
/// let expected: Vec<Value> = vec![1.into(), 4.into(), 7.into(), 10.into()];
/// assert_eq!(r, expected);
///
/// assert!(range(&5.into(), &1.into(), &1.into()).unwrap().is_empty());
/// assert!(range(&1.into(), &5.into(), &Value::Integer(0)).is_err());
/// ```
pub fn range(imin: &Value, imax: &Value, di: &Value) -> EvalResult<Vec<Value>> {
    if compare(imin, imax)? == Ordering::Greater {
        return Ok(Vec::new());
    }
    if compare(di, &Value::Integer(0))? != Ordering::Greater {
        return Err(invalid_step(imin, imax, di));
    }
    progression(imin, imax, di)
}

/// Calls `generate` `n` times and collects the results.
///
/// # Errors
/// Stops at and returns the first error from `generate`.
pub fn table_repeat<T>(n: usize, mut generate: impl FnMut() -> EvalResult<T>) -> EvalResult<Vec<T>> {
    (0..n).map(|_| generate()).collect()
}

/// Applies `f` to each point of the iteration `imin, imin + di, ...` through
/// `imax`.
///
/// A zero step evaluates `f(imin)` once. Negative steps count down, which
/// requires `imin >= imax`; a step that moves away from `imax` is an error.
///
/// # Errors
/// - `InvalidStep` if the step never reaches `imax`.
/// - The first error returned by `f`.
///
/// # Example
/// ```
/// use listkit::interpreter::{evaluator::function::construct::table_over, value::core::Value};
///
/// let squares = table_over(&1.into(), &4.into(), &1.into(), |v| {
///                   let i = v.as_integer()?;
///                   Ok(i * i)
///               }).unwrap();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
///
/// let once = table_over(&3.into(), &9.into(), &0.into(), |v| v.as_integer()).unwrap();
/// assert_eq!(once, vec![3]);
/// ```
pub fn table_over<T>(imin: &Value,
                     imax: &Value,
                     di: &Value,
                     f: impl FnMut(Value) -> EvalResult<T>)
                     -> EvalResult<Vec<T>> {
    let points = if compare(di, &Value::Integer(0))? == Ordering::Equal {
        vec![imin.clone()]
    } else {
        progression(imin, imax, di)?
    };
    points.into_iter().map(f).collect()
}

/// Returns `n + 1` equally spaced points from `xmin` to `xmax` inclusive.
///
/// The last point is exactly `xmax`.
///
/// # Errors
/// - `DivisionByZero` if `n == 0`.
/// - `InvalidArgument` if `n < 0`.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::construct::subdivide;
///
/// assert_eq!(subdivide(0.0, 1.0, 4).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(subdivide(0.0, 1.0, 0).is_err());
/// ```
pub fn subdivide(xmin: f64, xmax: f64, n: i64) -> EvalResult<Vec<f64>> {
    let parts = subdivision_count(n)?;
    let step = (xmax - xmin) / usize_to_f64_checked(parts)?;
    let mut points = (0..parts).map(|k| Ok(usize_to_f64_checked(k)?.mul_add(step, xmin)))
                               .collect::<EvalResult<Vec<_>>>()?;
    points.push(xmax);
    Ok(points)
}

fn subdivision_count(n: i64) -> EvalResult<usize> {
    match n.cmp(&0) {
        Ordering::Equal => Err(RuntimeError::DivisionByZero { details: "cannot subdivide into 0 parts".to_string() }),
        Ordering::Less => Err(invalid(format!("cannot subdivide into {n} parts"))),
        Ordering::Greater => i64_to_usize_checked(n),
    }
}

/// Returns the characters whose code points run from `first` to `last`
/// inclusive, skipping codes that are not Unicode scalar values.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::construct::character_range;
///
/// assert_eq!(character_range('a' as u32, 'e' as u32), vec!['a', 'b', 'c', 'd', 'e']);
/// assert!(character_range('z' as u32, 'a' as u32).is_empty());
/// ```
#[must_use]
pub fn character_range(first: u32, last: u32) -> Vec<char> {
    (first..=last).filter_map(char::from_u32).collect()
}

/// `Range[imax]`, `Range[imin, imax]` or `Range[imin, imax, di]`.
///
/// The one-argument form starts at 1.
pub(crate) fn range_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let one = Value::Integer(1);
    let values = match args {
        [imax] => range(&one, imax, &one)?,
        [imin, imax] => range(imin, imax, &one)?,
        [imin, imax, di] => range(imin, imax, di)?,
        _ => return Err(arity_mismatch("Range", args)),
    };
    Ok(Value::List(values))
}

/// `Table[f, n]` or `Table[f, {imin, imax, di}]`.
///
/// `f` must name a builtin. With a count it is always invoked with no
/// arguments; it is never inserted literally. With an iteration spec,
/// `{imax}` means `{1, imax}` and `di` defaults to 1.
pub(crate) fn table_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let name = function_arg(args, 0)?;

    let values = match &args[1] {
        Value::List(spec) => {
            let one = Value::Integer(1);
            let (imin, imax, di) = match spec.as_slice() {
                [imax] => (&one, imax, &one),
                [imin, imax] => (imin, imax, &one),
                [imin, imax, di] => (imin, imax, di),
                _ => {
                    return Err(invalid(format!("a Table iteration spec has 1 to 3 numbers, found {}",
                                               spec.len())));
                },
            };
            table_over(imin, imax, di, |i| context.call(name, &[i]))?
        },
        _ => {
            let n = count_arg_or(args, 1, 0, "Table count")?;
            table_repeat(n, || context.call(name, &[]))?
        },
    };

    Ok(Value::List(values))
}

/// `Subdivide[xmin, xmax, n]`.
///
/// Integer endpoints whose difference divides evenly by `n` produce integers;
/// everything else produces reals.
pub(crate) fn subdivide_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let n = args[2].as_integer()?;

    if let (Value::Integer(xmin), Value::Integer(xmax)) = (&args[0], &args[1]) {
        let parts = subdivision_count(n)?;
        let (lo, diff) = (i128::from(*xmin), i128::from(*xmax) - i128::from(*xmin));
        let divisor = i128::from(n);
        if diff % divisor == 0 {
            let step = diff / divisor;
            let points = (0..=parts).map(|k| {
                                        let k = i128::try_from(k).map_err(|_| RuntimeError::Overflow)?;
                                        i64::try_from(lo + k * step).map(Value::Integer)
                                                                    .map_err(|_| RuntimeError::Overflow)
                                    })
                                    .collect::<EvalResult<Vec<_>>>()?;
            return Ok(Value::List(points));
        }
    }

    let points = subdivide(args[0].as_real()?, args[1].as_real()?, n)?;
    Ok(Value::List(points.into_iter().map(Value::Real).collect()))
}

/// Reads a character bound: a one-character string or a code point.
fn character_code(value: &Value) -> EvalResult<u32> {
    match value {
        Value::Str(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(u32::from(c)),
                _ => Err(RuntimeError::ExpectedCharacter { found: value.to_string() }),
            }
        },
        Value::Integer(code) => i64_to_u32_checked(*code),
        _ => Err(RuntimeError::ExpectedCharacter { found: value.to_string() }),
    }
}

/// `CharacterRange[c1, c2]`.
pub(crate) fn character_range_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let first = character_code(&args[0])?;
    let last = character_code(&args[1])?;

    Ok(Value::List(character_range(first, last).into_iter().map(Value::from).collect()))
}
