use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    expression::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression source string into an [`Expr`] tree.
///
/// The whole input must form exactly one expression; anything left over after
/// it is reported as `UnexpectedTrailingTokens`.
///
/// # Errors
/// Returns a `ParseError` if the source is empty, contains an unknown
/// character or violates the grammar.
///
/// # Example
/// ```
/// use funcplot::expression::parse;
///
/// let expr = parse("-cos(x) * exp(-(x - pi) ** 2)").unwrap();
/// assert_eq!(expr.to_string(), "((-cos(x)) * exp((-((x - pi) ** 2))))");
///
/// assert!(parse("(x + 1").is_err());
/// assert!(parse("x +").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, source.len())?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{token:?}"),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for recursive descent. It begins at the
/// lowest-precedence level, addition, and descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `end`: Length of the source, reported when the input runs out.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, end)
}
