use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Every numeric literal becomes a `Number`; integers and reals are not
/// distinguished because evaluation happens in `f64` throughout.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `42` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens; symbols or function names such as `x` or `cos`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    StarStar,
    /// `^`, accepted as a synonym of `**`.
    #[token("^")]
    Caret,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace, including line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits an expression into `(Token, position)` pairs.
///
/// The position is the byte offset at which the token starts.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice of the source that
/// does not form a token.
///
/// # Example
/// ```
/// use funcplot::expression::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x ** 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".into()), 0), (Token::StarStar, 2), (Token::Number(2.0), 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
