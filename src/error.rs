/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing and parsing an
/// expression: unknown characters, misplaced operators, unbalanced
/// parentheses and trailing input.
pub mod parse_error;
/// Compilation errors.
///
/// Raised while turning a parsed expression into a numeric function: unknown
/// functions, wrong argument counts and symbols that are neither the sampling
/// variable nor a known constant.
pub mod compile_error;
/// Sampling errors.
///
/// Degenerate intervals, empty sample counts and callables that return the
/// wrong number of values.
pub mod sample_error;
/// Export errors.
///
/// Filesystem, XML and drawing failures raised while writing or reading the
/// result artifacts.
pub mod export_error;

pub use compile_error::CompileError;
pub use export_error::ExportError;
pub use parse_error::ParseError;
pub use sample_error::SampleError;

/// Any failure of the parse → compile → sample → export pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression references something that cannot be evaluated.
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The sampling interval or count is invalid.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// An artifact could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}
