use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    expression::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated argument list until the closing `)`.
///
/// The opening parenthesis must already be consumed. An immediately
/// encountered `)` produces an empty list.
///
/// Grammar: `arguments := (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first argument or `)`.
/// - `open`: Position of the opening parenthesis, for error reporting.
/// - `end`: Length of the source.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - an unexpected token separates two arguments,
/// - the stream ends before the closing `)`.
pub(in crate::expression::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                            open: usize,
                                                            end: usize)
                                                            -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, end)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("Expected ',' or ')', found {tok:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
    Ok(items)
}

/// Describes the next token for an error message, or reports the end of input.
pub(in crate::expression::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                       end: usize)
                                                       -> ParseError
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, position)) => ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                               position: *position, },
        None => ParseError::UnexpectedEndOfInput { position: end },
    }
}
