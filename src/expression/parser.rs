/// Entry points of the parser.
///
/// Defines the result type, the top-level `parse` function and the
/// `parse_expression` rule every other rule recurses into.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, symbols, function calls and parenthesised
/// groups.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules.
pub mod utils;
