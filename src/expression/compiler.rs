use std::fmt;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::CompileError,
    expression::function::{constant_value, lookup},
};

/// Result type used by the compiler.
pub type CompileResult<T> = Result<T, CompileError>;

/// A compiled expression node: the value of the subtree at a given abscissa.
type Kernel = Box<dyn Fn(f64) -> f64>;

/// A numeric function of one real variable, compiled from an [`Expr`].
///
/// The expression tree is walked once by [`compile`] and turned into nested
/// closures, so evaluating a point does no name lookups. Evaluation follows
/// IEEE 754: division by zero, logarithms of non-positive numbers and overflow
/// yield infinities or `nan`, never an error.
pub struct CompiledFunction {
    variable: String,
    source:   String,
    kernel:   Kernel,
}

impl CompiledFunction {
    /// Evaluates the function at every element of `inputs`.
    ///
    /// The output always has the length of the input, also when the variable
    /// does not occur in the expression.
    ///
    /// # Example
    /// ```
    /// use funcplot::expression::{compile, parse};
    ///
    /// let f = compile(&parse("x ** 2").unwrap(), "x").unwrap();
    /// assert_eq!(f.eval(&[-2.0, 0.5, 3.0]), vec![4.0, 0.25, 9.0]);
    ///
    /// let c = compile(&parse("2 * pi").unwrap(), "x").unwrap();
    /// assert_eq!(c.eval(&[0.0, 1.0]).len(), 2);
    /// ```
    #[must_use]
    pub fn eval(&self, inputs: &[f64]) -> Vec<f64> {
        inputs.iter().map(|&x| (self.kernel)(x)).collect()
    }

    /// Evaluates the function at a single point.
    #[must_use]
    pub fn eval_scalar(&self, x: f64) -> f64 {
        (self.kernel)(x)
    }

    /// The name of the variable the function is evaluated in.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl fmt::Debug for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFunction")
         .field("variable", &self.variable)
         .field("source", &self.source)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.variable, self.source)
    }
}

/// Compiles an expression into a function of `variable`.
///
/// Symbols are resolved in this order: the variable itself, then the named
/// constants (`pi`, `E`, `e`). Calls are resolved against the builtin table
/// and their argument counts are checked here, so a successfully compiled
/// function cannot fail when evaluated.
///
/// # Errors
/// - `InvalidVariableName` if `variable` is not an identifier.
/// - `UnknownFunction` for calls to names outside the builtin table.
/// - `ArgumentCountMismatch` for calls with the wrong number of arguments.
/// - `UnboundSymbol` for any other symbol.
///
/// # Example
/// ```
/// use funcplot::{
///     error::CompileError,
///     expression::{compile, parse},
/// };
///
/// let err = compile(&parse("foo(x)").unwrap(), "x").unwrap_err();
/// assert!(matches!(err, CompileError::UnknownFunction { .. }));
/// ```
pub fn compile(expr: &Expr, variable: &str) -> CompileResult<CompiledFunction> {
    if !is_identifier(variable) {
        return Err(CompileError::InvalidVariableName { name: variable.to_string() });
    }

    Ok(CompiledFunction { variable: variable.to_string(),
                          source:   expr.to_string(),
                          kernel:   compile_node(expr, variable)?, })
}

/// Recursively turns one node into a closure.
fn compile_node(expr: &Expr, variable: &str) -> CompileResult<Kernel> {
    match expr {
        Expr::Literal { value, .. } => {
            let value = *value;
            Ok(Box::new(move |_: f64| value))
        },
        Expr::Variable { name, position } => compile_symbol(name, *position, variable),
        Expr::UnaryOp { op, expr, .. } => {
            let operand = compile_node(expr, variable)?;
            let kernel: Kernel = match op {
                UnaryOperator::Negate => Box::new(move |x: f64| -operand(x)),
                UnaryOperator::Plus => operand,
            };
            Ok(kernel)
        },
        Expr::BinaryOp { left, op, right, .. } => {
            let left = compile_node(left, variable)?;
            let right = compile_node(right, variable)?;
            let kernel: Kernel = match op {
                BinaryOperator::Add => Box::new(move |x: f64| left(x) + right(x)),
                BinaryOperator::Sub => Box::new(move |x: f64| left(x) - right(x)),
                BinaryOperator::Mul => Box::new(move |x: f64| left(x) * right(x)),
                BinaryOperator::Div => Box::new(move |x: f64| left(x) / right(x)),
                BinaryOperator::Pow => Box::new(move |x: f64| left(x).powf(right(x))),
            };
            Ok(kernel)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => compile_call(name, arguments, *position, variable),
    }
}

fn compile_symbol(name: &str, position: usize, variable: &str) -> CompileResult<Kernel> {
    if name == variable {
        return Ok(Box::new(|x: f64| x));
    }
    if let Some(value) = constant_value(name) {
        return Ok(Box::new(move |_: f64| value));
    }
    Err(CompileError::UnboundSymbol { name: name.to_string(),
                                      position })
}

fn compile_call(name: &str,
                arguments: &[Expr],
                position: usize,
                variable: &str)
                -> CompileResult<Kernel> {
    let builtin = lookup(name).ok_or_else(|| CompileError::UnknownFunction { name: name.to_string(),
                                                                              position })?;

    if !builtin.arity.check(arguments.len()) {
        return Err(CompileError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: builtin.arity.describe(),
                                                         found: arguments.len(),
                                                         position });
    }

    let mut kernels = arguments.iter()
                               .map(|argument| compile_node(argument, variable))
                               .collect::<CompileResult<Vec<_>>>()?;
    let func = builtin.func;

    let kernel: Kernel = match kernels.len() {
        1 => {
            let a = kernels.remove(0);
            Box::new(move |x: f64| func(&[a(x)]))
        },
        2 => {
            let b = kernels.remove(1);
            let a = kernels.remove(0);
            Box::new(move |x: f64| func(&[a(x), b(x)]))
        },
        _ => Box::new(move |x: f64| {
            let values = kernels.iter().map(|k| k(x)).collect::<Vec<_>>();
            func(&values)
        }),
    };
    Ok(kernel)
}

/// Tests whether `name` could be lexed as a single identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
