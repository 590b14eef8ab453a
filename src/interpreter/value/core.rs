use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a dynamically typed value passed to and returned from builtins.
///
/// Sequences may nest arbitrarily; `Flatten` and `Map` walk that nesting,
/// every other builtin treats list elements as opaque.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// `True` or `False`.
    Bool(bool),
    /// A string. Characters produced by `CharacterRange` are one-character
    /// strings.
    Str(String),
    /// The name of a builtin, used to pass functions to `Map` and `Table`.
    Symbol(String),
    /// An ordered sequence of values.
    List(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Str(c.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Returns the name of this value's type, as shown in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// - Accepts `Value::Integer` directly.
    /// - Converts `Value::Real` if it is finite, in range and not fractional.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value if conversion succeeds.
    /// - `Err(RuntimeError)`: `ExpectedInteger` for non-numbers, or the
    ///   conversion error for reals that are not whole numbers.
    ///
    /// # Example
    /// ```
    /// use listkit::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer().unwrap(), 42);
    /// assert_eq!(Value::Real(10.0).as_integer().unwrap(), 10);
    /// assert!(Value::Real(1.23).as_integer().is_err());
    /// assert!(Value::from("a").as_integer().is_err());
    /// ```
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Real(r) => f64_to_i64_checked(*r),
            _ => Err(RuntimeError::ExpectedInteger { found: self.type_name() }),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers fail with `LiteralTooLarge` when they are not exactly
    /// representable as `f64`.
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name() }),
        }
    }

    /// Borrows the elements of a list value.
    pub fn as_list(&self) -> EvalResult<&[Self]> {
        match self {
            Self::List(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedList { found: self.type_name() }),
        }
    }

    /// Returns the builtin name held by a symbol.
    pub fn as_symbol(&self) -> EvalResult<&str> {
        match self {
            Self::Symbol(name) => Ok(name),
            _ => Err(RuntimeError::ExpectedFunction { found: self.type_name() }),
        }
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` for integers and reals.
    ///
    /// # Example
    /// ```
    /// use listkit::interpreter::value::core::Value;
    ///
    /// assert!(Value::Real(0.5).is_number());
    /// assert!(Value::Integer(3).is_integer());
    /// assert!(!Value::from("3").is_number());
    /// assert!(Value::List(vec![]).is_list());
    /// ```
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }

    /// Returns `true` if the value is [`Value::List`].
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps the decimal point on whole reals, so `2.0` prints
            // back as a real.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::List(items) => {
                write!(f, "{{")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "}}")
            },
        }
    }
}
