use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// Hashable mirror of [`Value`], used wherever values must be compared for
/// identity in a hash set (for example by `DeleteDuplicates`).
///
/// Reals are wrapped in [`OrderedFloat`], so `NaN` equals itself and `-0.0`
/// equals `0.0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKey {
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A real such as `3.141592653589793`.
    Real(OrderedFloat<f64>),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
    /// A builtin name.
    Symbol(String),
    /// A list such as `{1, 2, 2}`.
    List(Vec<ValueKey>),
}

impl From<&Value> for ValueKey {
    fn from(v: &Value) -> Self {
        match v {
            Value::Integer(i) => Self::Integer(*i),
            Value::Real(r) => Self::Real(OrderedFloat(*r)),
            Value::Bool(b) => Self::Bool(*b),
            Value::Str(s) => Self::Str(s.clone()),
            Value::Symbol(s) => Self::Symbol(s.clone()),
            Value::List(items) => Self::List(items.iter().map(Self::from).collect()),
        }
    }
}

impl Hash for ValueKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            },
            Self::Real(r) => {
                state.write_u8(1);
                r.hash(state);
            },
            Self::Bool(b) => {
                state.write_u8(2);
                b.hash(state);
            },
            Self::Str(s) => {
                state.write_u8(3);
                s.hash(state);
            },
            Self::Symbol(s) => {
                state.write_u8(4);
                s.hash(state);
            },
            Self::List(items) => {
                state.write_u8(5);
                items.hash(state);
            },
        }
    }
}
