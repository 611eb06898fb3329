/// Results directory handling.
///
/// Creates the directory both exporters write into, treating an existing
/// directory as success.
pub mod dir;
/// Plot export.
///
/// Renders the samples as a line plot into a PNG file.
pub mod plot;
/// Data export.
///
/// Writes the samples to the `data/xdata/ydata` XML document and reads such
/// documents back.
pub mod document;

use std::path::PathBuf;

pub use dir::ensure_results_dir;
pub use plot::save_plot;
pub use document::{load_xml, save_xml};

use crate::{error::export_error::ExportResult, sampler::SampleSet, task::Task};

/// Paths of the files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub plot: PathBuf,
    pub data: PathBuf,
}

/// Writes the plot and the data document of `task`.
///
/// # Errors
/// Returns the first `ExportError` raised by either exporter.
pub fn export_all(samples: &SampleSet, task: &Task) -> ExportResult<Artifacts> {
    let plot = save_plot(samples, &task.results_dir, &task.name)?;
    let data = save_xml(samples, &task.results_dir, &task.name)?;
    Ok(Artifacts { plot, data })
}
