use std::{io, path::PathBuf};

/// Represents all errors that can occur while writing or reading the result
/// artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The results directory could not be created.
    #[error("Failed to create results directory '{}': {source}", path.display())]
    CreateDir {
        /// The directory.
        path:   PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
    /// An artifact could not be opened, written or read.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// The artifact.
        path:   PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
    /// The XML emitter failed.
    #[error("Failed to write XML document '{}': {source}", path.display())]
    Xml {
        /// The artifact.
        path:   PathBuf,
        /// The underlying failure.
        source: xml::writer::Error,
    },
    /// The data document does not have the expected shape.
    #[error("Failed to read XML document '{}': {source}", path.display())]
    XmlRead {
        /// The artifact.
        path:   PathBuf,
        /// The underlying failure.
        source: serde_xml_rs::Error,
    },
    /// A value in the data document is not a real number.
    #[error("Invalid value '{value}' in '{}'.", path.display())]
    InvalidValue {
        /// The offending text.
        value: String,
        /// The artifact.
        path:  PathBuf,
    },
    /// The data document has a different number of `x` and `y` values.
    #[error("'{}' holds {x_count} x values but {y_count} y values.", path.display())]
    LengthMismatch {
        /// Number of `x` elements.
        x_count: usize,
        /// Number of `y` elements.
        y_count: usize,
        /// The artifact.
        path:    PathBuf,
    },
    /// The plot could not be drawn or encoded.
    #[error("Failed to render plot '{}': {message}", path.display())]
    Plot {
        /// The artifact.
        path:    PathBuf,
        /// The drawing backend's description of the failure.
        message: String,
    },
}

/// Result type used by the exporters.
pub type ExportResult<T> = Result<T, ExportError>;
