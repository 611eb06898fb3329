use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    expression::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::{parse_arguments, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators are right-associative, so an input like `--x` is parsed as
/// `-( -x )`. Without a prefix operator the function parses a primary and lets
/// [`parse_power`] attach an exponent to it.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        Some((Token::Plus, _)) => Some(UnaryOperator::Plus),
        _ => None,
    };

    if let Some(op) = op
       && let Some((_, position)) = tokens.next()
    {
        let expr = parse_unary(tokens, end)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  position: *position });
    }

    let primary = parse_primary(tokens, end)?;
    parse_power(tokens, primary, end)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - symbols
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | IDENTIFIER "(" arguments ")"
///              | "(" expression ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Number(value), position)) => {
            tokens.next();
            Ok(Expr::Literal { value:    *value,
                               position: *position, })
        },
        Some((Token::Identifier(_), _)) => parse_identifier_or_function(tokens, end),
        Some((Token::LParen, _)) => parse_grouping(tokens, end),
        _ => Err(unexpected(tokens, end)),
    }
}

/// Parses a parenthesized expression.
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find it yields
/// `ParseError::ExpectedClosingParen` pointing at the opening parenthesis.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((_, open)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: end });
    };
    let expr = parse_expression(tokens, end)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    format!("Expected ')', found {tok:?}"),
                                                                    position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { position: *open }),
    }
}

/// Parses a symbol or a function call.
///
/// An identifier immediately followed by `(` starts a call whose arguments
/// are parsed by [`parse_arguments`]; any other identifier is a symbol.
/// Whether the name denotes a known function or constant is decided when the
/// expression is compiled.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::Identifier(name), position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: end });
    };

    if let Some((Token::LParen, open)) = tokens.peek() {
        tokens.next();
        let arguments = parse_arguments(tokens, *open, end)?;
        return Ok(Expr::FunctionCall { name: name.clone(),
                                       arguments,
                                       position: *position });
    }

    Ok(Expr::Variable { name:     name.clone(),
                        position: *position, })
}
