use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value exceeds
/// `MAX_SAFE_U64_INT` in absolute value.
///
/// ## Example
/// ```
/// use listkit::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42).unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(RuntimeError::LiteralTooLarge);
    }
    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value exceeds
/// `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64_checked(value: usize) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(RuntimeError::LiteralTooLarge);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns an error for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use listkit::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { .. }));
///
/// let err = f64_to_i64_checked(1e20).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot convert non-finite value {value} to an integer") });
    }
    // Check range (inclusive, using truncation)
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::LiteralTooLarge);
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::RealIsFractional { value });
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to a `usize`.
///
/// ## Errors
/// Returns `LiteralTooSmall` for negative values and `LiteralTooLarge` when the
/// value does not fit the platform's `usize`.
///
/// ## Example
/// ```
/// use listkit::{error::RuntimeError, util::num::i64_to_usize_checked};
///
/// assert_eq!(i64_to_usize_checked(42).unwrap(), 42);
/// assert!(matches!(i64_to_usize_checked(-1), Err(RuntimeError::LiteralTooSmall)));
/// ```
pub fn i64_to_usize_checked(value: i64) -> EvalResult<usize> {
    if value < 0 {
        return Err(RuntimeError::LiteralTooSmall);
    }

    usize::try_from(value).map_or(Err(RuntimeError::LiteralTooLarge), Ok)
}

/// Safely converts an `i64` to `u32`, as needed for character codes.
///
/// ## Errors
/// Returns `LiteralTooLarge` above `u32::MAX` and `LiteralTooSmall` below
/// zero.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    if value > u32::MAX as i64 {
        return Err(RuntimeError::LiteralTooLarge);
    }

    if value < 0 {
        return Err(RuntimeError::LiteralTooSmall);
    }
    Ok(value as u32)
}
