/// Numeric conversion and formatting helpers.
///
/// This module provides a checked conversion from sample counts to `f64` and
/// the textual form of real numbers used by the data document, together with
/// its inverse.
pub mod num;
