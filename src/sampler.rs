use crate::{error::SampleError, util::num::usize_to_f64_checked};

/// Result type used by the sampler.
pub type SampleResult<T> = Result<T, SampleError>;

/// Number of samples taken when a task does not say otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// A closed interval `[low, high]` of the real line.
///
/// The bounds are not validated on construction; [`sample`] and [`linspace`]
/// reject intervals that are empty, reversed, not finite or so wide that
/// `high - low` overflows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low:  f64,
    pub high: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Checks that both bounds are finite, `low < high` and the width
    /// `high - low` is finite.
    ///
    /// # Errors
    /// Returns `SampleError::InvalidInterval` otherwise.
    pub fn validate(&self) -> SampleResult<()> {
        if self.low < self.high && (self.high - self.low).is_finite() {
            Ok(())
        } else {
            Err(SampleError::InvalidInterval { low:  self.low,
                                               high: self.high, })
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Sampled abscissae and the function values at them.
///
/// Both sequences always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl SampleSet {
    /// Pairs up two sequences read from elsewhere, e.g. a data document.
    ///
    /// # Errors
    /// Returns `SampleError::LengthMismatch` if the lengths differ.
    pub fn from_parts(x_values: Vec<f64>, y_values: Vec<f64>) -> SampleResult<Self> {
        if x_values.len() != y_values.len() {
            return Err(SampleError::LengthMismatch { expected: x_values.len(),
                                                     found:    y_values.len(), });
        }
        Ok(Self { x_values, y_values })
    }

    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Iterates over `(x, y)` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }

    /// Number of samples whose value is `nan` or infinite.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.y_values.iter().filter(|y| !y.is_finite()).count()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x_values, self.y_values)
    }
}

/// Returns `count` evenly spaced numbers over `[low, high]`.
///
/// The spacing is `(high - low) / (count - 1)` and the last element is exactly
/// `high`. A single sample is `[low]`.
///
/// # Errors
/// - `InvalidInterval` if the interval is rejected by [`Interval::validate`].
/// - `InvalidCount` if `count` is zero or too large to index exactly.
///
/// # Example
/// ```
/// use funcplot::sampler::{Interval, linspace};
///
/// assert_eq!(linspace(Interval::new(0.0, 4.0), 5).unwrap(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(linspace(Interval::new(-1.0, 1.0), 1).unwrap(), vec![-1.0]);
/// assert!(linspace(Interval::new(1.0, 1.0), 3).is_err());
/// ```
pub fn linspace(interval: Interval, count: usize) -> SampleResult<Vec<f64>> {
    interval.validate()?;
    if count == 0 {
        return Err(SampleError::InvalidCount { count });
    }
    if count == 1 {
        return Ok(vec![interval.low]);
    }

    let intervals = usize_to_f64_checked(count - 1, SampleError::InvalidCount { count })?;
    let step = (interval.high - interval.low) / intervals;

    let mut values = (0..count).map(|i| {
                                   let offset = usize_to_f64_checked(i, SampleError::InvalidCount { count })?;
                                   Ok(interval.low + offset * step)
                               })
                               .collect::<SampleResult<Vec<_>>>()?;
    if let Some(last) = values.last_mut() {
        *last = interval.high;
    }
    Ok(values)
}

/// Samples `f` at `count` evenly spaced points of `interval`.
///
/// `f` is called once with the whole abscissa vector and must return one
/// value per input. Non-finite results are kept as they are.
///
/// # Errors
/// - `InvalidInterval` / `InvalidCount` as for [`linspace`].
/// - `LengthMismatch` if `f` returns the wrong number of values.
///
/// # Example
/// ```
/// use funcplot::sampler::{Interval, sample};
///
/// let samples = sample(|xs| xs.iter().map(|x| x * x).collect(), Interval::new(-2.0, 2.0), 5).unwrap();
/// assert_eq!(samples.y_values(), &[4.0, 1.0, 0.0, 1.0, 4.0]);
/// ```
pub fn sample<F>(f: F, interval: Interval, count: usize) -> SampleResult<SampleSet>
    where F: FnOnce(&[f64]) -> Vec<f64>
{
    let x_values = linspace(interval, count)?;
    let y_values = f(&x_values);
    SampleSet::from_parts(x_values, y_values)
}
