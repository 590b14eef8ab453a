use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{
                construct, dedup, drop, flatten, map, number_theory, partition, random, riffle,
            },
            utils::arity_mismatch,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the context
/// that owns the random generator.
type BuiltinFn = fn(&[Value], &mut Context) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with at least `n` arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every registered builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "Range"            => { arity: Arity::OneOf(&[1, 2, 3]), func: construct::range_builtin },
    "Table"            => { arity: Arity::Exact(2), func: construct::table_builtin },
    "Subdivide"        => { arity: Arity::Exact(3), func: construct::subdivide_builtin },
    "CharacterRange"   => { arity: Arity::Exact(2), func: construct::character_range_builtin },
    "Drop"             => { arity: Arity::Exact(2), func: drop::drop_builtin },
    "Flatten"          => { arity: Arity::OneOf(&[1, 2]), func: flatten::flatten_builtin },
    "Partition"        => { arity: Arity::OneOf(&[1, 2]), func: partition::partition_builtin },
    "Riffle"           => { arity: Arity::Exact(2), func: riffle::riffle_builtin },
    "Shuffle"          => { arity: Arity::OneOf(&[1, 2]), func: random::shuffle_builtin },
    "RandomChoice"     => { arity: Arity::OneOf(&[1, 2]), func: random::random_choice_builtin },
    "RandomReal"       => { arity: Arity::OneOf(&[0, 1, 2]), func: random::random_real_builtin },
    "RandomInteger"    => { arity: Arity::OneOf(&[0, 1, 2]), func: random::random_integer_builtin },
    "Map"              => { arity: Arity::OneOf(&[2, 3]), func: map::map_builtin },
    "DeleteDuplicates" => { arity: Arity::Exact(1), func: dedup::delete_duplicates_builtin },
    "GCD"              => { arity: Arity::AtLeast(1), func: number_theory::gcd_builtin },
    "EulerPhi"         => { arity: Arity::Exact(1), func: number_theory::euler_phi_builtin },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// Returns `true` if `name` is a registered builtin.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TABLE.iter().any(|b| b.name == name)
}

impl Context {
    /// Calls a builtin by name.
    ///
    /// The name is looked up in the builtin table, the argument count is
    /// checked against the builtin's arity, and the builtin runs. Failures are
    /// logged as warnings before being returned to the caller.
    ///
    /// # Errors
    /// - `UnknownFunction` if no builtin has this name.
    /// - `ArgumentCountMismatch` if the arity check fails.
    /// - Whatever the builtin itself reports.
    ///
    /// # Example
    /// ```
    /// use listkit::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::with_seed(1);
    /// let args = [Value::from(vec![1.into(), 2.into(), 3.into()]),
    ///             Value::from(vec![10.into()])];
    ///
    /// let riffled = context.call("Riffle", &args).unwrap();
    /// assert_eq!(riffled.to_string(), "{1, 10, 2, 10, 3}");
    /// ```
    pub fn call(&mut self, name: &str, args: &[Value]) -> EvalResult<Value> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(self.report(name, RuntimeError::UnknownFunction { name: name.to_string() }));
        };

        if !builtin.arity.check(args.len()) {
            return Err(self.report(name, arity_mismatch(name, args)));
        }

        log::debug!("{name}: dispatching with {} argument(s) at depth {}", args.len(), self.depth);
        self.depth += 1;
        let result = (builtin.func)(args, self);
        self.depth -= 1;

        result.map_err(|e| self.report(name, e))
    }

    /// Logs a failed call and hands the error back.
    ///
    /// Failures inside another builtin (a `Map` or `Table` callee) are logged
    /// at debug level; the outermost call logs the warning once.
    fn report(&self, name: &str, error: RuntimeError) -> RuntimeError {
        if self.depth == 0 {
            log::warn!("{name}: {error}");
        } else {
            log::debug!("{name}: {error} (depth {})", self.depth);
        }
        error
    }
}
