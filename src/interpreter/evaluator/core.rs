use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by every builtin.
///
/// All builtins return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state shared across builtin calls.
///
/// The only state a builtin ever touches is the pseudo-random generator used
/// by `Shuffle`, `RandomChoice`, `RandomReal` and `RandomInteger`. It lives here instead of in a global so
/// callers control seeding and two threads never share a generator.
///
/// ## Usage
///
/// Create one `Context` per caller and reuse it. Seed it with
/// [`Context::with_seed`] when results must be reproducible.
pub struct Context {
    rng:   SmallRng,
    /// Number of builtin calls currently running, so only the outermost
    /// failure is reported as a warning.
    pub(crate) depth: usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context whose generator is seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self { rng:   SmallRng::from_os_rng(),
               depth: 0, }
    }

    /// Creates a context with a deterministic generator.
    ///
    /// The sequence of random draws is identical for equal seeds on the same
    /// platform.
    ///
    /// # Example
    /// ```
    /// use listkit::{evaluate, interpreter::evaluator::core::Context};
    ///
    /// let a = evaluate("Shuffle[Range[20]]", &mut Context::with_seed(7)).unwrap();
    /// let b = evaluate("Shuffle[Range[20]]", &mut Context::with_seed(7)).unwrap();
    ///
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng:   SmallRng::seed_from_u64(seed),
               depth: 0, }
    }

    /// Borrows the generator for the randomized builtins.
    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to themselves, list literals evaluate each element,
    /// bare identifiers become [`Value::Symbol`] so they can be passed as
    /// functions, and calls evaluate their arguments first, innermost call
    /// first, before dispatching through [`Context::call`].
    ///
    /// # Example
    /// ```
    /// use listkit::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let call = Expr::Call { name:      "GCD".into(),
    ///                         arguments: vec![Expr::Literal { value:  LiteralValue::Integer(12),
    ///                                                         offset: 4, },
    ///                                         Expr::Literal { value:  LiteralValue::Integer(18),
    ///                                                         offset: 8, }],
    ///                         offset:    0, };
    ///
    /// assert_eq!(Context::with_seed(0).eval(&call).unwrap(), Value::Integer(6));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Symbol { name, .. } => Ok(Value::Symbol(name.clone())),
            Expr::List { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::List(values))
            },
            Expr::Call { name, arguments, .. } => {
                let values = arguments.iter()
                                      .map(|argument| self.eval(argument))
                                      .collect::<EvalResult<Vec<_>>>()?;
                self.call(name, &values)
            },
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => Self::Integer(*i),
            LiteralValue::Real(r) => Self::Real(*r),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

