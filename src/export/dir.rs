use std::{fs, path::Path};

use tracing::debug;

use crate::error::{ExportError, export_error::ExportResult};

/// Creates the results directory, including missing parents.
///
/// Calling it for a directory that already exists is a no-op, so both
/// exporters can call it independently. Every other failure, including an
/// existing non-directory at `path`, is returned.
///
/// # Errors
/// Returns `ExportError::CreateDir` if the directory cannot be created.
///
/// # Example
/// ```
/// use funcplot::export::ensure_results_dir;
///
/// let root = tempfile::tempdir().unwrap();
/// let dir = root.path().join("results");
/// ensure_results_dir(&dir).unwrap();
/// ensure_results_dir(&dir).unwrap();
/// assert!(dir.is_dir());
/// ```
pub fn ensure_results_dir(path: &Path) -> ExportResult<()> {
    match fs::create_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "results directory ready");
            Ok(())
        },
        Err(source) => Err(ExportError::CreateDir { path: path.to_path_buf(),
                                                    source }),
    }
}
