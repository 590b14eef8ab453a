/// Represents a literal value as written in source text.
///
/// Lists are not literals: they are [`Expr::List`] nodes so their elements can
/// themselves be calls.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal such as `-3`.
    Integer(i64),
    /// A 64-bit floating-point literal such as `0.25` or `1e-3`.
    Real(f64),
    /// `True` or `False`.
    Bool(bool),
    /// A double-quoted string literal, without its quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An expression node produced by the reader.
///
/// Every node records the byte offset where it starts, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// A bare identifier, such as `EulerPhi` in `Map[EulerPhi, {1, 2}]`.
    Symbol {
        /// The identifier.
        name:   String,
        /// Byte offset in the source text.
        offset: usize,
    },
    /// A list literal such as `{1, {2, 3}}`.
    List {
        /// The element expressions.
        elements: Vec<Self>,
        /// Byte offset in the source text.
        offset:   usize,
    },
    /// A builtin call such as `Drop[{1, 2, 3}, 1]`.
    Call {
        /// Name of the builtin being called.
        name:      String,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        offset:    usize,
    },
}
