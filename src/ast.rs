use std::{collections::BTreeSet, fmt};

/// An abstract syntax tree (AST) node representing a parsed formula.
///
/// `Expr` covers literals, symbols, unary and binary arithmetic and function
/// calls. Each variant carries the byte position of its first token in the
/// source so that later stages can point at the offending part of the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Position in the source.
        position: usize,
    },
    /// Reference to a symbol by name: the sampling variable or a constant.
    Variable {
        /// Name of the symbol.
        name:     String,
        /// Position in the source.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position in the source.
        position: usize,
    },
    /// A binary operation (addition, power, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source.
        position: usize,
    },
    /// Function call expression (e.g. `cos(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position in the source.
        position:  usize,
    },
}

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Plus,
}

/// Operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**` or `^`
    Pow,
}

impl Expr {
    /// Returns the source position of this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Collects the names of all symbols referenced outside call position.
    ///
    /// Function names are not included, constants such as `pi` are.
    ///
    /// # Example
    /// ```
    /// use funcplot::expression::parse;
    ///
    /// let expr = parse("cos(x) * pi").unwrap();
    /// let names: Vec<_> = expr.free_variables().into_iter().collect();
    /// assert_eq!(names, ["pi", "x"]);
    /// ```
    #[must_use]
    pub fn free_variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Literal { .. } => {},
            Self::Variable { name, .. } => {
                names.insert(name.as_str());
            },
            Self::UnaryOp { expr, .. } => expr.collect_variables(names),
            Self::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::FunctionCall { arguments, .. } => {
                for argument in arguments {
                    argument.collect_variables(names);
                }
            },
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "**"),
        }
    }
}

/// Renders the formula with every compound subexpression parenthesised, so
/// the output shows exactly how precedence was resolved.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}
