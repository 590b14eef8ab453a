/// Core parsing entry points.
///
/// Parses single expressions and whole inputs made of several expressions.
pub mod core;

/// Shared parsing helpers.
pub mod utils;
