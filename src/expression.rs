/// The lexer module tokenizes expression source text.
///
/// Produces `(Token, position)` pairs for numbers, identifiers, operators and
/// parentheses, and reports the first character that does not form a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token stream implementing the usual
/// arithmetic precedence: sums, products, signs, right-associative powers,
/// calls and parenthesised groups.
pub mod parser;
/// Builtin functions and named constants.
///
/// The lookup table the compiler resolves calls and constant symbols against.
pub mod function;
/// The compiler turns an AST into a callable numeric function.
///
/// Resolves every symbol and call up front and produces nested closures that
/// evaluate the formula on `f64` inputs with IEEE 754 semantics.
pub mod compiler;

pub use compiler::{CompiledFunction, compile};
pub use parser::core::parse;
