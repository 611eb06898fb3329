use funcplot::{
    error::{Error, SampleError},
    evaluate,
    expression::{compile, parse},
    sampler::{Interval, SampleSet, linspace, sample},
    task::Task,
};
use proptest::prelude::*;

fn samples_of(src: &str, low: f64, high: f64, count: usize) -> SampleSet {
    let task = Task::default().with_expression(src)
                              .with_interval((low, high))
                              .with_count(count);
    evaluate(&task).unwrap_or_else(|e| panic!("Failed to sample {src:?}: {e}"))
}

#[test]
fn identity_on_unit_steps() {
    let samples = samples_of("x", 0.0, 4.0, 5);
    assert_eq!(samples.x_values().to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(samples.y_values().to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn square_is_symmetric() {
    let samples = samples_of("x ** 2", -2.0, 2.0, 5);
    assert_eq!(samples.x_values().to_vec(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert_eq!(samples.y_values().to_vec(), vec![4.0, 1.0, 0.0, 1.0, 4.0]);
}

#[test]
fn reciprocal_at_zero_is_not_finite() {
    let samples = samples_of("1 / x", -1.0, 1.0, 3);
    assert_eq!(samples.x_values().to_vec(), vec![-1.0, 0.0, 1.0]);

    let y = samples.y_values();
    assert_eq!(y[0], -1.0);
    assert!(!y[1].is_finite());
    assert_eq!(y[2], 1.0);
    assert_eq!(samples.non_finite_count(), 1);
}

#[test]
fn unknown_function_fails_the_run() {
    let task = Task::default().with_expression("foo(x)");
    assert!(matches!(evaluate(&task), Err(Error::Compile(_))));
}

#[test]
fn malformed_expression_fails_the_run() {
    let task = Task::default().with_expression("cos(x");
    assert!(matches!(evaluate(&task), Err(Error::Parse(_))));
}

#[test]
fn default_task_has_reference_shape() {
    let task = Task::default();
    assert_eq!(task.count, 500);
    assert_eq!(task.interval, Interval::new(-100.0, 100.0));

    let samples = evaluate(&task).unwrap();
    assert_eq!(samples.len(), 500);
    assert_eq!(samples.x_values()[0], -100.0);
    assert_eq!(samples.x_values()[499], 100.0);
    assert_eq!(samples.non_finite_count(), 0);
}

#[test]
fn single_sample_is_low_bound() {
    let samples = samples_of("x + 1", -3.0, 5.0, 1);
    assert_eq!(samples.x_values().to_vec(), vec![-3.0]);
    assert_eq!(samples.y_values().to_vec(), vec![-2.0]);
}

#[test]
fn degenerate_intervals_are_rejected() {
    assert_eq!(linspace(Interval::new(1.0, 1.0), 5),
               Err(SampleError::InvalidInterval { low: 1.0, high: 1.0 }));
    assert!(matches!(linspace(Interval::new(2.0, 1.0), 5), Err(SampleError::InvalidInterval { .. })));
    assert!(matches!(linspace(Interval::new(0.0, f64::INFINITY), 5),
                     Err(SampleError::InvalidInterval { .. })));
    assert!(matches!(linspace(Interval::new(f64::NAN, 1.0), 5), Err(SampleError::InvalidInterval { .. })));
}

#[test]
fn interval_wider_than_f64_range_is_rejected() {
    assert_eq!(linspace(Interval::new(-1e308, 1e308), 5),
               Err(SampleError::InvalidInterval { low: -1e308, high: 1e308 }));

    let xs = linspace(Interval::new(-8e307, 8e307), 5).unwrap();
    assert_eq!(xs[0], -8e307);
    assert_eq!(xs[4], 8e307);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn zero_count_is_rejected() {
    assert_eq!(linspace(Interval::new(0.0, 1.0), 0), Err(SampleError::InvalidCount { count: 0 }));

    let task = Task::default().with_expression("x").with_count(0);
    assert!(matches!(evaluate(&task), Err(Error::Sample(SampleError::InvalidCount { count: 0 }))));
}

#[test]
fn callable_returning_wrong_length_is_rejected() {
    let result = sample(|xs| xs[1..].to_vec(), Interval::new(0.0, 1.0), 4);
    assert_eq!(result, Err(SampleError::LengthMismatch { expected: 4, found: 3 }));
}

#[test]
fn from_parts_checks_lengths() {
    assert!(SampleSet::from_parts(vec![1.0, 2.0], vec![1.0]).is_err());

    let samples = SampleSet::from_parts(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
    assert_eq!(samples.points().collect::<Vec<_>>(), vec![(1.0, 3.0), (2.0, 4.0)]);
    assert_eq!(samples.into_parts(), (vec![1.0, 2.0], vec![3.0, 4.0]));
}

proptest! {
    /// Abscissae start at `low`, end at `high`, have exactly `count` elements
    /// and increase strictly.
    #[test]
    fn linspace_is_strictly_increasing(low in -1.0e6..1.0e6f64,
                                       width in 1.0e-3..1.0e6f64,
                                       count in 2usize..2000) {
        let high = low + width;
        prop_assume!(low < high);
        let xs = linspace(Interval::new(low, high), count).unwrap();

        prop_assert_eq!(xs.len(), count);
        prop_assert_eq!(xs[0], low);
        prop_assert_eq!(xs[count - 1], high);
        prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }
}

proptest! {
    /// Every sampled value equals the compiled function applied to its
    /// abscissa.
    #[test]
    fn samples_match_pointwise_evaluation(low in -50.0..50.0f64,
                                          width in 0.5..50.0f64,
                                          count in 1usize..300,
                                          src in prop::sample::select(vec!["x",
                                                                           "x ** 2 - 3 * x",
                                                                           "sin(x) * exp(-x / 10)",
                                                                           "-cos(x) * cos(pi) * exp(-(x - pi) ** 2)",
                                                                           "1 / (x ** 2 + 1)"])) {
        let function = compile(&parse(src).unwrap(), "x").unwrap();
        let samples = sample(|xs| function.eval(xs), Interval::new(low, low + width), count).unwrap();

        prop_assert_eq!(samples.len(), count);
        for (x, y) in samples.points() {
            let expected = function.eval_scalar(x);
            prop_assert!((y - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
