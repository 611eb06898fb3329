//! # funcplot
//!
//! funcplot samples a mathematical expression of one variable over a closed
//! interval, renders the samples as a line plot and exports them as an XML
//! document.
//!
//! The pipeline is strictly linear: the expression text is parsed into an
//! [`ast::Expr`], compiled into a [`expression::CompiledFunction`], sampled
//! into a [`sampler::SampleSet`] and finally written by the [`export`]
//! module. Everything a run needs is described by a [`task::Task`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, info, warn};

use crate::{
    error::Error,
    export::{Artifacts, export_all},
    expression::{compile, parse},
    sampler::{SampleSet, sample},
    task::Task,
};

/// Defines the structure of a parsed formula.
///
/// This module declares the `Expr` enum and its operators. The AST is built by
/// the parser and consumed by the compiler; it also renders itself back to a
/// fully parenthesised formula for diagnostics.
pub mod ast;
/// Provides the error types of every pipeline stage.
///
/// Parse, compile, sample and export failures each have their own enum; the
/// top-level `Error` wraps all of them for the pipeline entry points.
pub mod error;
/// Writes the result artifacts.
///
/// # Responsibilities
/// - Creates the results directory idempotently.
/// - Renders the PNG line plot.
/// - Writes (and reads back) the XML data document.
pub mod export;
/// Turns expression text into a numeric function.
///
/// # Responsibilities
/// - Tokenizes and parses the source into an AST, reporting syntax errors
///   with their position.
/// - Resolves symbols, constants and builtin functions.
/// - Compiles the tree into a callable evaluated with IEEE 754 semantics.
pub mod expression;
/// Generates evenly spaced abscissae and evaluates a function on them.
pub mod sampler;
/// The run configuration and its compiled-in defaults.
pub mod task;
/// General numeric helpers shared by the sampler and the exporters.
pub mod util;

/// Parses, compiles and samples the expression of `task`.
///
/// Nothing is written to disk.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or compiled, or if the
/// interval or sample count is invalid.
///
/// # Example
/// ```
/// use funcplot::{evaluate, task::Task};
///
/// let task = Task::default().with_expression("x ** 2").with_interval((-2.0, 2.0)).with_count(5);
/// let samples = evaluate(&task).unwrap();
/// assert_eq!(samples.y_values(), &[4.0, 1.0, 0.0, 1.0, 4.0]);
/// ```
pub fn evaluate(task: &Task) -> Result<SampleSet, Error> {
    info!(expression = %task.expression, "parsing expression");
    let expr = parse(&task.expression)?;
    debug!(%expr, "parsed");

    let function = compile(&expr, &task.variable)?;
    if !expr.free_variables().contains(task.variable.as_str()) {
        warn!(variable = %task.variable, "expression does not depend on the variable, sampling a constant");
    }
    debug!(%function, "compiled");

    let samples = sample(|xs| function.eval(xs), task.interval, task.count)?;
    let non_finite = samples.non_finite_count();
    if non_finite > 0 {
        warn!(non_finite, "some samples are not finite");
    }
    info!(count = samples.len(),
          low = task.interval.low,
          high = task.interval.high,
          "sampled");

    Ok(samples)
}

/// Runs the whole pipeline for `task` and writes both artifacts.
///
/// # Errors
/// Returns the first failure of any stage. Artifacts written before the
/// failure are left in place.
pub fn run(task: &Task) -> Result<Artifacts, Error> {
    let samples = evaluate(task)?;
    let artifacts = export_all(&samples, task)?;
    info!(plot = %artifacts.plot.display(),
          data = %artifacts.data.display(),
          "done");
    Ok(artifacts)
}
