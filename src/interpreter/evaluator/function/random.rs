//! Fisher-Yates shuffling, uniform or weighted random choice, and uniform
//! random numbers.
//!
//! Every function takes the generator explicitly. Builtins pass the
//! [`Context`]'s generator, so seeding the context makes them reproducible.

use rand::{Rng, distr::Uniform};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{arity_mismatch, count_arg_or, invalid, list_arg},
        },
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

/// Shuffles `items` in place with `passes` sequential Fisher-Yates passes.
///
/// Each pass walks from the last index down to the second, swapping the
/// element with a uniformly chosen earlier (or same) position. Later passes
/// reshuffle the output of earlier ones; `passes == 0` leaves `items` as is.
///
/// # Complexity
/// Time: O(passes * n), Space: O(1) (in-place)
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::random::shuffle;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = SmallRng::seed_from_u64(42);
/// shuffle(&mut v, 3, &mut rng);
///
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(items: &mut [T], passes: usize, rng: &mut R) {
    let n = items.len();
    if n <= 1 {
        return;
    }
    for _ in 0..passes {
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}

/// Picks one element uniformly at random.
///
/// # Errors
/// `InvalidArgument` if `items` is empty.
pub fn random_element<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> EvalResult<&'a T> {
    if items.is_empty() {
        return Err(invalid("cannot choose from an empty list"));
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Picks `count` elements independently and uniformly, with replacement.
///
/// # Errors
/// `InvalidArgument` if `items` is empty and `count > 0`.
pub fn random_sample<T: Clone, R: Rng>(items: &[T], count: usize, rng: &mut R) -> EvalResult<Vec<T>> {
    (0..count).map(|_| random_element(items, &mut *rng).cloned()).collect()
}

/// Picks one element with probability proportional to its weight.
///
/// Weights need not sum to 1, and their sum may exceed `f64::MAX`. A
/// threshold is drawn uniformly from `[0, total)` and weights are subtracted
/// from it in order; the element that takes it below zero is returned.
/// Elements of weight zero are never returned.
///
/// # Errors
/// - `LengthMismatch` if `weights.len() != items.len()`.
/// - `InvalidArgument` if `items` is empty, a weight is negative or not
///   finite, or all weights are zero.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::random::weighted_choice;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// for _ in 0..50 {
///     assert_eq!(*weighted_choice(&["a", "b", "c"], &[0.0, 0.0, 1.0], &mut rng).unwrap(), "c");
/// }
/// ```
pub fn weighted_choice<'a, T, R: Rng>(items: &'a [T],
                                      weights: &[f64],
                                      rng: &mut R)
                                      -> EvalResult<&'a T> {
    if items.len() != weights.len() {
        return Err(RuntimeError::LengthMismatch { values:  items.len(),
                                                  weights: weights.len(), });
    }
    if items.is_empty() {
        return Err(invalid("cannot choose from an empty list"));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(invalid(format!("weights must be finite and non-negative, found {w}")));
    }

    let largest = weights.iter().copied().fold(0.0, f64::max);
    if largest <= 0.0 {
        return Err(invalid("at least one weight must be positive"));
    }

    // Scaled weights are at most 1, so `total` is finite.
    let total: f64 = weights.iter().map(|w| w / largest).sum();
    let mut remaining = rng.random_range(0.0..total);
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            remaining -= w / largest;
            last_positive = i;
            if remaining < 0.0 {
                return Ok(&items[i]);
            }
        }
    }

    // Rounding can leave a sliver of the threshold after the last weight.
    Ok(&items[last_positive])
}

/// `Shuffle[t]` or `Shuffle[t, n]`.
pub(crate) fn shuffle_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let mut items = list_arg(args, 0)?.to_vec();
    let passes = count_arg_or(args, 1, 1, "Shuffle pass count")?;

    shuffle(&mut items, passes, context.rng());
    Ok(Value::List(items))
}

/// `RandomChoice[t]`, `RandomChoice[t, n]` or `RandomChoice[t, weights]`.
pub(crate) fn random_choice_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let items = list_arg(args, 0)?;

    match args.get(1) {
        None => random_element(items, context.rng()).cloned(),
        Some(Value::List(weights)) => {
            let weights = weights.iter().map(Value::as_real).collect::<EvalResult<Vec<_>>>()?;
            weighted_choice(items, &weights, context.rng()).cloned()
        },
        Some(count) => {
            let n = count.as_integer()?;
            if n < 0 {
                return Err(invalid(format!("RandomChoice count must be non-negative, found {n}")));
            }
            Ok(Value::List(random_sample(items, i64_to_usize_checked(n)?, context.rng())?))
        },
    }
}

/// `RandomReal[]`, `RandomReal[max]` or `RandomReal[min, max]`.
///
/// Draws uniformly from `[min, max)`, with `min` defaulting to 0 and `max`
/// to 1. The bounds must be finite, `min < max`, and `max - min` must not
/// overflow.
pub(crate) fn random_real_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let (lo, hi) = match args {
        [] => (0.0, 1.0),
        [max] => (0.0, max.as_real()?),
        [min, max] => (min.as_real()?, max.as_real()?),
        _ => return Err(arity_mismatch("RandomReal", args)),
    };
    let uniform = Uniform::new(lo, hi)
        .map_err(|e| invalid(format!("RandomReal cannot draw from [{lo}, {hi}): {e}")))?;
    Ok(Value::Real(context.rng().sample(uniform)))
}

/// `RandomInteger[]`, `RandomInteger[max]` or `RandomInteger[min, max]`.
///
/// Draws uniformly from `min..=max`, with `min` defaulting to 0 and `max` to
/// 1.
pub(crate) fn random_integer_builtin(args: &[Value], context: &mut Context) -> EvalResult<Value> {
    let (lo, hi) = match args {
        [] => (0, 1),
        [max] => (0, max.as_integer()?),
        [min, max] => (min.as_integer()?, max.as_integer()?),
        _ => return Err(arity_mismatch("RandomInteger", args)),
    };
    if lo > hi {
        return Err(invalid(format!("RandomInteger needs min <= max, found {lo} and {hi}")));
    }
    Ok(Value::Integer(context.rng().random_range(lo..=hi)))
}
