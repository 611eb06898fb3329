use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use plotters::prelude::*;
use tracing::info;

use crate::{
    error::{ExportError, export_error::ExportResult},
    export::dir::ensure_results_dir,
    sampler::SampleSet,
    task::{TaskName, artifact_path},
};

/// Size of the rendered image in pixels.
pub const PLOT_SIZE: (u32, u32) = (640, 480);
/// Line color, `#1f77b4`.
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
/// Fraction of the data range added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Renders `samples` as a line plot into `<dir>/<name>.png`.
///
/// The samples are drawn as one connected line in sample order. Points whose
/// coordinates are not finite cannot be placed, so they split the line into
/// separate segments. The results directory is created when missing and an
/// existing image is overwritten.
///
/// # Errors
/// - `ExportError::CreateDir` if the directory cannot be created.
/// - `ExportError::Plot` if drawing or encoding the image fails.
pub fn save_plot(samples: &SampleSet, dir: &Path, name: &TaskName) -> ExportResult<PathBuf> {
    ensure_results_dir(dir)?;
    let path = artifact_path(dir, name, "png");

    render(samples, &path).map_err(|e| ExportError::Plot { path:    path.clone(),
                                                           message: e.to_string(), })?;

    info!(path = %path.display(), "wrote plot");
    Ok(path)
}

fn render(samples: &SampleSet, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = axis_range(samples.x_values().iter().copied());
    let y_range = axis_range(samples.y_values().iter().copied());

    let mut chart = ChartBuilder::on(&root).margin(15)
                                           .x_label_area_size(30)
                                           .y_label_area_size(50)
                                           .build_cartesian_2d(x_range, y_range)?;
    chart.configure_mesh().x_labels(0).y_labels(0).draw()?;

    for segment in finite_segments(samples) {
        chart.draw_series(LineSeries::new(segment, LINE_COLOR.stroke_width(2)))?;
    }

    root.present()?;
    Ok(())
}

/// Splits the samples into runs of consecutive finite points.
fn finite_segments(samples: &SampleSet) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (x, y) in samples.points() {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Finite bounds of `values` widened by [`AXIS_MARGIN`].
///
/// A single distinct value is widened to `value ± 1` and a sequence without
/// any finite value falls back to `-1..1`.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let bounds = values.filter(|v| v.is_finite())
                       .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                           Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                           None => Some((v, v)),
                       });

    match bounds {
        None => -1.0..1.0,
        Some((lo, hi)) if lo == hi => (lo - 1.0)..(hi + 1.0),
        Some((lo, hi)) => {
            let span = hi - lo;
            let pad = if span.is_finite() { span * AXIS_MARGIN } else { 0.0 };
            (lo - pad)..(hi + pad)
        },
    }
}
