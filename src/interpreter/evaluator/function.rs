/// The builtin registry.
///
/// Maps builtin names to their arity and implementation and dispatches calls.
pub mod core;
/// `Range`, `Table`, `Subdivide` and `CharacterRange`.
///
/// Builds new sequences from numeric or character bounds.
pub mod construct;
/// `DeleteDuplicates`.
pub mod dedup;
/// `Drop`.
///
/// Removes elements selected by an index specification.
pub mod drop;
/// `Flatten`.
///
/// Splices nested lists into their parent up to a depth.
pub mod flatten;
/// `Map`.
///
/// Applies a function to every element down to a depth.
pub mod map;
/// `GCD` and `EulerPhi`.
pub mod number_theory;
/// `Partition`.
pub mod partition;
/// `Shuffle`, `RandomChoice`, `RandomReal` and `RandomInteger`.
///
/// The only builtins that draw from the context's generator.
pub mod random;
/// `Riffle`.
pub mod riffle;
