/// Represents all errors that can occur while sampling a function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// The interval is empty, reversed, has a non-finite bound or a width that
    /// overflows.
    #[error("Invalid interval ({low}, {high}): the bounds must be finite, ordered and less than f64::MAX apart.")]
    InvalidInterval {
        /// Lower bound.
        low:  f64,
        /// Upper bound.
        high: f64,
    },
    /// The requested number of samples cannot be produced.
    #[error("Invalid sample count {count}: at least one sample is required.")]
    InvalidCount {
        /// The rejected count.
        count: usize,
    },
    /// The abscissae and ordinates have different lengths.
    #[error("Sample length mismatch: expected {expected} values, found {found}.")]
    LengthMismatch {
        /// Number of abscissae.
        expected: usize,
        /// Number of ordinates.
        found:    usize,
    },
}
