use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::invalid,
        },
        value::core::Value,
    },
};

/// Euclid's algorithm on a pair: `gcd(a, 0) = a`, `gcd(0, b) = b`, otherwise
/// `gcd(b, a mod b)`.
///
/// The sign follows the remainder chain, so negative inputs can give a
/// negative result; [`gcd`] normalizes it.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::number_theory::gcd_pair;
///
/// assert_eq!(gcd_pair(12, 18), 6);
/// assert_eq!(gcd_pair(0, 5), 5);
/// assert_eq!(gcd_pair(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd_pair(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        // `wrapping_rem` maps `i64::MIN % -1` to 0 instead of overflowing.
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of one or more integers, folded pairwise from the
/// left.
///
/// A single value is returned unchanged. With two or more values the result
/// is non-negative.
///
/// # Errors
/// - `InvalidArgument` if `values` is empty.
/// - `Overflow` if the result is `abs(i64::MIN)`.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::number_theory::gcd;
///
/// assert_eq!(gcd(&[12, 18, 30]).unwrap(), 6);
/// assert_eq!(gcd(&[7]).unwrap(), 7);
/// assert_eq!(gcd(&[-4, 6]).unwrap(), 2);
/// ```
pub fn gcd(values: &[i64]) -> EvalResult<i64> {
    match values {
        [] => Err(invalid("GCD needs at least one integer")),
        [single] => Ok(*single),
        [first, rest @ ..] => {
            rest.iter()
                .fold(*first, |acc, &n| gcd_pair(acc, n))
                .checked_abs()
                .ok_or(RuntimeError::Overflow)
        },
    }
}

/// Euler's totient: how many integers in `1..=n` are coprime to `n`.
///
/// Trial division finds each distinct prime factor `p` up to the square root
/// of the remaining cofactor; every such `p` applies `result -= result / p`
/// and is stripped from the cofactor. A cofactor left above 1 is itself prime
/// and gets the same adjustment.
///
/// # Errors
/// `InvalidArgument` if `n <= 0`.
///
/// # Example
/// ```
/// use listkit::interpreter::evaluator::function::number_theory::euler_phi;
///
/// assert_eq!(euler_phi(1).unwrap(), 1);
/// assert_eq!(euler_phi(9).unwrap(), 6);
/// assert_eq!(euler_phi(17).unwrap(), 16);
/// assert_eq!(euler_phi(36).unwrap(), 12);
/// ```
pub fn euler_phi(n: i64) -> EvalResult<i64> {
    if n <= 0 {
        return Err(invalid(format!("EulerPhi is defined for positive integers, found {n}")));
    }

    let mut result = n;
    let mut rest = n;
    let mut p = 2;
    while p <= rest / p {
        if rest % p == 0 {
            while rest % p == 0 {
                rest /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if rest > 1 {
        result -= result / rest;
    }
    Ok(result)
}

/// `GCD[n1, n2, ...]`.
pub(crate) fn gcd_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    let values = args.iter().map(Value::as_integer).collect::<EvalResult<Vec<_>>>()?;

    Ok(Value::Integer(gcd(&values)?))
}

/// `EulerPhi[n]`.
///
/// Integral reals such as `9.0` are accepted; anything else that is not an
/// integer is reported rather than truncated.
pub(crate) fn euler_phi_builtin(args: &[Value], _: &mut Context) -> EvalResult<Value> {
    Ok(Value::Integer(euler_phi(args[0].as_integer()?)?))
}
