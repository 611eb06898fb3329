use std::f64::consts::{E, PI};

use funcplot::{
    error::{CompileError, ParseError},
    expression::{compile, parse},
};

fn eval_at(src: &str, x: f64) -> f64 {
    let expr = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    let function = compile(&expr, "x").unwrap_or_else(|e| panic!("Failed to compile {src:?}: {e}"));
    function.eval_scalar(x)
}

fn assert_close(src: &str, x: f64, expected: f64) {
    let actual = eval_at(src, x);
    assert!((actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "{src} at x = {x}: expected {expected}, got {actual}");
}

fn assert_parse_failure(src: &str) {
    if parse(src).is_ok() {
        panic!("{src:?} parsed but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_close("1 + 2", 0.0, 3.0);
    assert_close("7 * 9", 0.0, 63.0);
    assert_close("8 - 5", 0.0, 3.0);
    assert_close("10 / 4", 0.0, 2.5);
    assert_close("x + 1", 2.0, 3.0);
}

#[test]
fn precedence_and_associativity() {
    assert_close("2 + 3 * 4", 0.0, 14.0);
    assert_close("(2 + 3) * 4", 0.0, 20.0);
    assert_close("8 - 3 - 2", 0.0, 3.0);
    assert_close("16 / 4 / 2", 0.0, 2.0);
    assert_close("2 ** 3 ** 2", 0.0, 512.0);
    assert_close("2 ^ 3", 0.0, 8.0);
    assert_close("-x ** 2", 3.0, -9.0);
    assert_close("x ** -1", 4.0, 0.25);
    assert_close("2 * -x", 3.0, -6.0);
    assert_close("--x", 5.0, 5.0);
    assert_close("+x", 5.0, 5.0);
}

#[test]
fn display_shows_resolved_precedence() {
    assert_eq!(parse("1 + 2 * x").unwrap().to_string(), "(1 + (2 * x))");
    assert_eq!(parse("-x ** 2").unwrap().to_string(), "(-(x ** 2))");
    assert_eq!(parse("log(x, 2)").unwrap().to_string(), "log(x, 2)");
}

#[test]
fn number_literals() {
    assert_close(".5", 0.0, 0.5);
    assert_close("2.", 0.0, 2.0);
    assert_close("1e3", 0.0, 1000.0);
    assert_close("2.5E-1", 0.0, 0.25);
}

#[test]
fn constants_and_builtins() {
    assert_close("pi", 0.0, PI);
    assert_close("E", 0.0, E);
    assert_close("cos(pi)", 0.0, -1.0);
    assert_close("sin(x)", PI / 2.0, 1.0);
    assert_close("exp(x)", 1.0, E);
    assert_close("log(x)", E, 1.0);
    assert_close("log(x, 2)", 8.0, 3.0);
    assert_close("ln(x)", 1.0, 0.0);
    assert_close("sqrt(x)", 9.0, 3.0);
    assert_close("Abs(x)", -2.5, 2.5);
    assert_close("atan2(1, 1)", 0.0, PI / 4.0);
    assert_close("Max(x, 3)", 1.0, 3.0);
    assert_close("Min(x, 3)", 1.0, 1.0);
    assert_close("sign(x)", -4.0, -1.0);
    assert_close("sign(x)", 0.0, 0.0);
    assert_close("ceiling(x)", 1.2, 2.0);
}

#[test]
fn reference_expression_evaluates() {
    let src = "-cos(x) * cos(pi) * exp(-(x - pi) ** 2)";
    assert_close(src, PI, -1.0);
    assert_close(src, 0.0, (-PI * PI).exp());
}

#[test]
fn domain_errors_are_not_finite() {
    assert!(eval_at("1 / x", 0.0).is_infinite());
    assert!(eval_at("log(x)", -1.0).is_nan());
    assert_eq!(eval_at("log(x)", 0.0), f64::NEG_INFINITY);
    assert!(eval_at("sqrt(x)", -1.0).is_nan());
    assert!(eval_at("exp(x)", 1000.0).is_infinite());
    assert!(eval_at("x ** (1 / 3)", -8.0).is_nan());
}

#[test]
fn constant_expression_broadcasts() {
    let function = compile(&parse("3 * pi").unwrap(), "x").unwrap();
    let values = function.eval(&[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|v| (v - 3.0 * PI).abs() < 1e-12));
}

#[test]
fn custom_variable_name() {
    let function = compile(&parse("t * 2").unwrap(), "t").unwrap();
    assert_eq!(function.variable(), "t");
    assert_eq!(function.eval(&[1.0, 2.0]), vec![2.0, 4.0]);
}

#[test]
fn free_variables_ignore_function_names() {
    let expr = parse("cos(x) + y * pi").unwrap();
    let names = expr.free_variables().into_iter().collect::<Vec<_>>();
    assert_eq!(names, ["pi", "x", "y"]);
}

#[test]
fn malformed_expressions_fail_to_parse() {
    assert_parse_failure("");
    assert_parse_failure("   ");
    assert_parse_failure("(x + 1");
    assert_parse_failure("x + 1)");
    assert_parse_failure("x +");
    assert_parse_failure("* x");
    assert_parse_failure("x $ 2");
    assert_parse_failure("2x");
    assert_parse_failure("cos(x,)");
    assert_parse_failure("cos(x");
}

#[test]
fn parse_errors_carry_positions() {
    assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse("x $ 2"),
               Err(ParseError::UnexpectedToken { token:    "$".to_string(),
                                                 position: 2, }));
    assert_eq!(parse("(x + 1"), Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse("x +"), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
    assert!(matches!(parse("x 2"), Err(ParseError::UnexpectedTrailingTokens { position: 2, .. })));
}

#[test]
fn unknown_function_is_rejected() {
    let expr = parse("foo(x)").unwrap();
    assert_eq!(compile(&expr, "x").unwrap_err(),
               CompileError::UnknownFunction { name:     "foo".to_string(),
                                               position: 0, });
}

#[test]
fn unbound_symbol_is_rejected() {
    let expr = parse("x + y").unwrap();
    assert!(matches!(compile(&expr, "x"),
                     Err(CompileError::UnboundSymbol { ref name, position: 4 }) if name == "y"));
}

#[test]
fn argument_counts_are_checked() {
    let err = compile(&parse("cos(x, 1)").unwrap(), "x").unwrap_err();
    assert!(matches!(err, CompileError::ArgumentCountMismatch { found: 2, .. }));

    let err = compile(&parse("log()").unwrap(), "x").unwrap_err();
    assert!(err.to_string().contains("1 or 2"), "{err}");
}

#[test]
fn invalid_variable_name_is_rejected() {
    let expr = parse("x").unwrap();
    assert!(matches!(compile(&expr, ""), Err(CompileError::InvalidVariableName { .. })));
    assert!(matches!(compile(&expr, "1x"), Err(CompileError::InvalidVariableName { .. })));
}
