/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// Sample indices and counts go through this helper so that very large counts
/// are rejected instead of silently producing repeated abscissae.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use funcplot::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(usize_to_f64_checked(usize::MAX, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(error),
    }
}

/// Formats a real number for the data document.
///
/// Finite values use the shortest representation that parses back to the same
/// `f64`. Integral values keep a trailing `.0` and very large or very small
/// magnitudes switch to scientific notation. Non-finite values are written as
/// `nan`, `inf` and `-inf`.
///
/// ## Example
/// ```
/// use funcplot::util::num::format_real;
///
/// assert_eq!(format_real(-100.0), "-100.0");
/// assert_eq!(format_real(0.25), "0.25");
/// assert_eq!(format_real(1e-7), "1e-7");
/// assert_eq!(format_real(f64::NAN), "nan");
/// assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // `Debug` is the shortest round-trip form and already keeps the `.0`.
    format!("{value:?}")
}

/// Parses a real number written by [`format_real`].
///
/// Surrounding whitespace is ignored. `nan`, `inf` and `-inf` are accepted in
/// any letter case.
///
/// ## Example
/// ```
/// use funcplot::util::num::parse_real;
///
/// assert_eq!(parse_real(" 1.5 "), Some(1.5));
/// assert!(parse_real("nan").is_some_and(f64::is_nan));
/// assert_eq!(parse_real("-inf"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_real("one"), None);
/// ```
#[must_use]
pub fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}
