/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected or unknown token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Length of the source.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Where the unclosed `(` starts.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the extra token starts.
        position: usize,
    },
    /// The source contains no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
}
