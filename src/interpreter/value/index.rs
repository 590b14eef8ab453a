use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::core::Value}};

/// Positions selected by a `Drop` index specification.
///
/// Positions are 1-based. A bare integer counts elements from the front
/// (positive) or the back (negative); a list of one to three integers names a
/// single position, an inclusive span, or a strided span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpec {
    /// `n`: the first `n` elements, or the last `|n|` when negative.
    Count(i64),
    /// `{n}`: position `n`.
    Single(i64),
    /// `{m, n}`: positions `m` through `n`.
    Span(i64, i64),
    /// `{m, n, s}`: positions `m, m + s, m + 2s, ...` not past `n`.
    Stride(i64, i64, i64),
}

impl IndexSpec {
    /// Returns `true` if the 1-based `position` of a sequence of length `len`
    /// is selected.
    ///
    /// Positions outside `1..=len` are never selected.
    ///
    /// # Example
    /// ```
    /// use listkit::interpreter::value::index::IndexSpec;
    ///
    /// assert!(IndexSpec::Count(-2).selects(4, 4));
    /// assert!(!IndexSpec::Count(-2).selects(2, 4));
    /// assert!(IndexSpec::Stride(1, 5, 2).selects(3, 6));
    /// assert!(!IndexSpec::Stride(1, 5, 2).selects(4, 6));
    /// ```
    #[must_use]
    pub fn selects(&self, position: i64, len: i64) -> bool {
        if position < 1 || position > len {
            return false;
        }
        match *self {
            Self::Count(n) if n >= 0 => position <= n,
            Self::Count(n) => position > len.saturating_add(n),
            Self::Single(n) => position == n,
            Self::Span(m, n) => (m..=n).contains(&position),
            Self::Stride(m, n, s) => {
                s > 0 && (m..=n).contains(&position) && position.abs_diff(m) % s.unsigned_abs() == 0
            },
        }
    }
}

impl TryFrom<&Value> for IndexSpec {
    type Error = RuntimeError;

    /// Reads an index specification from an integer or a list of one to three
    /// integers.
    ///
    /// # Errors
    /// - `ExpectedInteger` if a component is not an integer.
    /// - `InvalidArgument` for an empty or over-long list, or a stride that is
    ///   not positive.
    fn try_from(value: &Value) -> EvalResult<Self> {
        let Value::List(parts) = value else {
            return Ok(Self::Count(value.as_integer()?));
        };

        let parts = parts.iter().map(Value::as_integer).collect::<EvalResult<Vec<_>>>()?;

        match parts.as_slice() {
            [n] => Ok(Self::Single(*n)),
            [m, n] => Ok(Self::Span(*m, *n)),
            [_, _, s] if *s <= 0 => {
                Err(RuntimeError::InvalidArgument { details: format!("index stride must be positive, found {s}") })
            },
            [m, n, s] => Ok(Self::Stride(*m, *n, *s)),
            _ => Err(RuntimeError::InvalidArgument { details: format!("an index specification has 1 to 3 integers, found {}",
                                                                       parts.len()) }),
        }
    }
}
