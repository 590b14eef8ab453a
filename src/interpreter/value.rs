/// The `Value` enum and its conversions.
///
/// Declares the dynamically typed values builtins consume and produce
/// (integers, reals, booleans, strings, builtin symbols and nested lists),
/// along with checked accessors and the printed form.
pub mod core;
/// Index specifications.
///
/// Defines `IndexSpec`, the 1-based position selector used by `Drop`.
pub mod index;
/// Hashable value keys.
///
/// Defines `ValueKey`, a hashable mirror of `Value` with reals wrapped in
/// `OrderedFloat`, used for duplicate detection.
pub mod key;
