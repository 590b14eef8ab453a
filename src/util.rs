/// Numeric conversion helpers.
///
/// Checked conversions between `i64`, `usize`, `u32`, and `f64`. Every helper
/// returns a `Result`, which is `Ok` only when the conversion is lossless.
pub mod num;
