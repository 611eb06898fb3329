/// Represents all errors that can occur while compiling an expression into a
/// numeric function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Called a function that is not a builtin.
    #[error("Error at position {position}: Unknown function: {name}.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call starts.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a builtin.
    #[error("Error at position {position}: {name} expects {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable list of accepted counts, e.g. `1 or 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// Where the call starts.
        position: usize,
    },
    /// A symbol is neither the sampling variable nor a known constant.
    #[error("Error at position {position}: Unbound symbol: {name}.")]
    UnboundSymbol {
        /// The name of the symbol.
        name:     String,
        /// Where the symbol starts.
        position: usize,
    },
    /// The sampling variable is not a valid identifier.
    #[error("Invalid variable name: '{name}'.")]
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
}
