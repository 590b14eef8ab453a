#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that a builtin can report to its caller.
pub enum RuntimeError {
    /// Called a builtin name that is not registered.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    ArgumentCountMismatch {
        /// The name of the builtin.
        name:  String,
        /// How many arguments were supplied.
        found: usize,
    },
    /// An integer value was expected.
    ExpectedInteger {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
    /// A numeric value was expected.
    ExpectedNumber {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
    /// A list value was expected.
    ExpectedList {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
    /// A builtin symbol was expected in function position.
    ExpectedFunction {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
    /// A single character or a character code was expected.
    ExpectedCharacter {
        /// Printed form of the offending value.
        found: String,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A step never moves the start of an iteration toward its bound.
    InvalidStep {
        /// Printed start value.
        start: String,
        /// Printed bound.
        end:   String,
        /// Printed step.
        step:  String,
    },
    /// Two sequences that must pair up have different lengths.
    LengthMismatch {
        /// Length of the value sequence.
        values:  usize,
        /// Length of the companion sequence.
        weights: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// What was being divided.
        details: String,
    },
    /// Arithmetic operation overflowed.
    Overflow,
    /// Tried to use a real number where an integer was required.
    RealIsFractional {
        /// The fractional value.
        value: f64,
    },
    /// A value was too large to be represented safely.
    LiteralTooLarge,
    /// A value was too small (usually negative) to be represented safely.
    LiteralTooSmall,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::ArgumentCountMismatch { name, found } => {
                write!(f, "{name} cannot be called with {found} argument(s).")
            },
            Self::ExpectedInteger { found } => write!(f, "Expected integer, found {found}."),
            Self::ExpectedNumber { found } => write!(f, "Expected number, found {found}."),
            Self::ExpectedList { found } => write!(f, "Expected list, found {found}."),
            Self::ExpectedFunction { found } => {
                write!(f, "Expected a builtin function name, found {found}.")
            },
            Self::ExpectedCharacter { found } => {
                write!(f, "Expected a single character or character code, found {found}.")
            },
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
            Self::InvalidStep { start, end, step } => write!(f,
                                                             "Step {step} never reaches {end} when starting from {start}."),
            Self::LengthMismatch { values, weights } => write!(f,
                                                               "Found {values} value(s) but {weights} weight(s); lengths must match."),
            Self::DivisionByZero { details } => write!(f, "Division by zero: {details}."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::RealIsFractional { value } => write!(f,
                                                       "Value {value} is fractional and cannot be safely converted to an integer."),
            Self::LiteralTooLarge => write!(f, "Value is too large."),
            Self::LiteralTooSmall => write!(f, "Value is too small."),
        }
    }
}

impl std::error::Error for RuntimeError {}
