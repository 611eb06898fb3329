use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    expression::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `end`: Length of the source.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, end)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, end)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are unary
/// expressions, so `2 * -x` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, end)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, end)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation on top of an already parsed base.
///
/// Exponentiation is right-associative and binds tighter than a leading sign
/// on its base but not on its exponent: `-x ** 2` is `-(x ** 2)` while
/// `x ** -2` is `x ** (-2)`, and `a ** b ** c` parses as `a ** (b ** c)`.
///
/// The rule is: `power := primary (("**" | "^") unary)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the base.
/// - `base`: The already parsed primary expression.
/// - `end`: Length of the source.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, base: Expr, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((token, position)) = tokens.peek()
       && token_to_binary_operator(token) == Some(BinaryOperator::Pow)
    {
        tokens.next();
        let exponent = parse_unary(tokens, end)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: *position, });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use funcplot::{
///     ast::BinaryOperator,
///     expression::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::StarStar | Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
